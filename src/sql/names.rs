use itertools::Itertools;

/// Tutors whose note spelling differs from their staff record.
/// Matched on the exact display name, applied after splitting.
const NAME_CORRECTIONS: &[(&str, &str, &str)] = &[
    ("Livinia Xia-Bednikov", "Livinia", "Xia-Bednorz"),
    ("Alessia D'Angelis", "Alessia", "D'Angelo"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorName {
    pub first: String,
    pub last: String,
}

/// First whitespace token is the first name, the rest (single-spaced) the last.
pub fn split_tutor_name(full: &str) -> TutorName {
    let mut tokens = full.split_whitespace();
    let mut name = TutorName {
        first: tokens.next().unwrap_or_default().to_string(),
        last: tokens.join(" "),
    };

    if let Some((_, first, last)) = NAME_CORRECTIONS.iter().find(|(raw, _, _)| *raw == full) {
        name.first = (*first).to_string();
        name.last = (*last).to_string();
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(full: &str) -> (String, String) {
        let n = split_tutor_name(full);
        (n.first, n.last)
    }

    #[test]
    fn two_words() {
        assert_eq!(split("Jane Doe"), ("Jane".into(), "Doe".into()));
    }

    #[test]
    fn multi_word_surname_is_single_spaced() {
        assert_eq!(split("Maria  de   la Cruz"), ("Maria".into(), "de la Cruz".into()));
    }

    #[test]
    fn single_word() {
        assert_eq!(split("Cher"), ("Cher".into(), String::new()));
    }

    #[test]
    fn empty_name() {
        assert_eq!(split(""), (String::new(), String::new()));
    }

    #[test]
    fn corrected_surnames() {
        assert_eq!(split("Livinia Xia-Bednikov"), ("Livinia".into(), "Xia-Bednorz".into()));
        assert_eq!(split("Alessia D'Angelis"), ("Alessia".into(), "D'Angelo".into()));
    }

    #[test]
    fn corrections_need_exact_match() {
        assert_eq!(split("livinia Xia-Bednikov"), ("livinia".into(), "Xia-Bednikov".into()));
        assert_eq!(split("Alessia  D'Angelis"), ("Alessia".into(), "D'Angelis".into()));
    }
}
