//! The three persisted entity kinds.

use std::fmt;

use serde::Serialize;

/// Identifies which table / collection a record or reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Category,
    Note,
}

impl EntityKind {
    /// Capitalised name used at the start of messages (`"Category"`).
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Category => "Category",
            EntityKind::Note => "Note",
        }
    }

    /// Lowercase name used mid-sentence (`"category"`).
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Category => "category",
            EntityKind::Note => "note",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
