use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)---\r?\n(.*?)\r?\n---").unwrap());
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| field_re("Day"));
static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| field_re("Subject"));
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| field_re("Time"));

fn field_re(label: &str) -> Regex {
    Regex::new(&format!(r"(?m)^[ \t]*{}: (.*)$", regex::escape(label))).unwrap()
}

/// The three schedule fields every class note must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub day: String,
    pub subject: String,
    pub time: String,
}

/// First `---` ... `---` block in the note, without the delimiters.
pub fn block(content: &str) -> Option<&str> {
    BLOCK_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn fields(front_matter: &str) -> Result<Fields, ExtractError> {
    Ok(Fields {
        day: field(&DAY_RE, front_matter).ok_or(ExtractError::MissingField("Day"))?,
        subject: field(&SUBJECT_RE, front_matter).ok_or(ExtractError::MissingField("Subject"))?,
        time: field(&TIME_RE, front_matter).ok_or(ExtractError::MissingField("Time"))?,
    })
}

fn field(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].trim().to_string())
}
