//! Operation status shared by every store operation.

use std::fmt;

use serde::Serialize;

/// Loading/error indicator for the most recently settled operation.
///
/// There is one status per store, not one per call: when calls overlap, the
/// last one to settle wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    /// A network call is in flight.
    pub loading: bool,
    /// Classified message from the last failed operation.
    pub error: Option<String>,
}

impl OperationStatus {
    /// Neither loading nor failed.
    pub const fn idle() -> Self {
        Self {
            loading: false,
            error: None,
        }
    }

    pub(crate) const fn loading() -> Self {
        Self {
            loading: true,
            error: None,
        }
    }

    pub(crate) const fn failed(message: String) -> Self {
        Self {
            loading: false,
            error: Some(message),
        }
    }

    /// Whether the last settled operation failed.
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Store operations, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
