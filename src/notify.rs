//! Notification side-channel: a message and whether it reports success.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: Kind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Kind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Kind::Error,
        }
    }

    pub fn copied() -> Self {
        Self::success("Password copied to clipboard!")
    }

    pub fn copy_failed() -> Self {
        Self::error("Failed to copy password")
    }
}
