use thiserror::Error;

/// Raised when a wire-format value does not name a member of one of the
/// closed domain enums. These never reach the workflow engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown ticket status: {0:?}")]
    UnknownStatus(String),
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),
    #[error("Unknown priority: {0:?}")]
    UnknownPriority(String),
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),
}

/// Canonical form for wire names: trimmed, lowercase, with `-` and spaces
/// folded into `_` so "In Progress" and "in-progress" both read as "in_progress".
pub(crate) fn normalize_wire_name(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}
