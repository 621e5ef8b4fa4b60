pub mod front_matter;
pub mod tutors;

use std::path::Path;

use crate::error::ExtractError;
use crate::record::ClassRecord;

/// Read a class note and pull out its schedule record.
pub fn extract_class_info(path: &Path) -> Result<ClassRecord, ExtractError> {
    let content = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_class_note(&class_id(path), &content)
}

/// Front matter → fields, whole note → tutors.
pub fn parse_class_note(class_id: &str, content: &str) -> Result<ClassRecord, ExtractError> {
    let fm = front_matter::block(content).ok_or(ExtractError::MissingFrontMatter)?;
    let fields = front_matter::fields(fm)?;

    Ok(ClassRecord {
        class_id: class_id.to_string(),
        day: fields.day,
        subject: fields.subject,
        time: fields.time,
        tutors: tutors::extract(content),
    })
}

/// File name with a trailing `.md` removed.
pub fn class_id(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.strip_suffix(".md").unwrap_or(&name).to_string()
}
