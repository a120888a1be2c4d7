use serde::Serialize;

use super::Gender;

/// One row of the static name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NameRecord {
    pub name: &'static str,
    pub meaning: &'static str,
    pub tribe: &'static str,
    pub gender: Gender,
}

impl NameRecord {
    pub const fn new(
        name: &'static str,
        meaning: &'static str,
        tribe: &'static str,
        gender: Gender,
    ) -> Self {
        Self {
            name,
            meaning,
            tribe,
            gender,
        }
    }
}

/// A catalog pick combined with a caller-supplied family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub record: NameRecord,
    pub full_name: String,
}

impl FullName {
    pub fn compose(record: NameRecord, last_name: &str) -> Self {
        let last_name = last_name.trim();
        let full_name = if last_name.is_empty() {
            record.name.to_string()
        } else {
            format!("{} {}", record.name, last_name)
        };
        Self { record, full_name }
    }
}
