/// Schedule metadata pulled from one class note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    /// File stem of the note, e.g. `phys-101`.
    pub class_id: String,
    pub day: String,
    pub subject: String,
    /// Raw start time as written in the note; see [`crate::time::normalize_time`].
    pub time: String,
    /// Display names from the `Tutor::` line, in source order.
    pub tutors: Vec<String>,
}
