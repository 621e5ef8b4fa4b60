pub mod names;

use uuid::Uuid;

use crate::record::ClassRecord;
use crate::time::{end_time, normalize_time};
use names::{split_tutor_name, TutorName};

pub const SQL_HEADER: &str = "-- SQL script to create classes and assign tutors\n";

/// Comment line that precedes every class block in the output file.
pub fn class_header(record: &ClassRecord) -> String {
    format!("\n-- Class: {} ({})\n", record.class_id, record.subject)
}

/// SQL for one class with a fresh random primary key.
pub fn class_sql(record: &ClassRecord) -> String {
    class_sql_with_id(record, Uuid::new_v4())
}

/// Class insert, id echo, then two guarded inserts per tutor.
///
/// Staff lookups, `map_day_to_number`, `map_subject_to_id` and
/// `uuid_generate_v4` all resolve in the target database.
pub fn class_sql_with_id(record: &ClassRecord, class_uuid: Uuid) -> String {
    let start = normalize_time(&record.time);
    let end = end_time(&start);
    let code = quote(&record.class_id);

    let mut sql = format!(
        "INSERT INTO classes (id, subject, day_of_week, start_time, end_time, status, subject_id)
VALUES (
  '{class_uuid}',
  '{code}',
  map_day_to_number('{day}'),
  '{start}',
  '{end}',
  'ACTIVE',
  map_subject_to_id('{code}')
);

-- Store mapping for tutor assignments
SELECT '{class_uuid}' as class_id, '{code}' as class_code;
",
        day = quote(&record.day),
    );

    for tutor in &record.tutors {
        let name = split_tutor_name(tutor);
        push_tutor_sql(&mut sql, tutor, &name, &record.class_id, class_uuid);
    }

    sql
}

fn push_tutor_sql(sql: &mut String, display: &str, name: &TutorName, class_id: &str, class_uuid: Uuid) {
    let first = quote(&name.first);
    let last = quote(&name.last);

    sql.push_str(&format!(
        "
-- Assign tutor {display} to class {class_id}
INSERT INTO classes_staff (id, staff_id, class_id, start_date, status)
SELECT
  uuid_generate_v4(),
  (SELECT id FROM staff WHERE first_name = '{first}' AND last_name = '{last}'),
  '{class_uuid}',
  CURRENT_DATE,
  'ACTIVE'
WHERE EXISTS (
  SELECT 1 FROM staff WHERE first_name = '{first}' AND last_name = '{last}'
);

-- Add subject to tutor's subjects if not already assigned
INSERT INTO staff_subjects (staff_id, subject_id)
SELECT
  s.id,
  c.subject_id
FROM
  staff s
  JOIN classes c ON c.id = '{class_uuid}'
WHERE
  s.first_name = '{first}'
  AND s.last_name = '{last}'
  AND NOT EXISTS (
    SELECT 1
    FROM staff_subjects ss
    WHERE ss.staff_id = s.id
    AND ss.subject_id = c.subject_id
  );
"
    ));
}

/// Body of a single-quoted SQL string literal.
fn quote(value: &str) -> String {
    value.replace('\'', "''")
}
