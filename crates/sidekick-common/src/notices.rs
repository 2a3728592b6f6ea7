//! User-facing status notices (errors, warnings, confirmations).

/// Severity of a notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A one-line message for the front end to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub body: String,
}

impl Notice {
    pub fn info(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            body: body.into(),
        }
    }

    pub fn success(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            body: body.into(),
        }
    }

    pub fn warning(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            body: body.into(),
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            body: body.into(),
        }
    }

    /// Returns `true` for notices that should go to stderr.
    pub fn is_problem(&self) -> bool {
        matches!(self.level, NoticeLevel::Warning | NoticeLevel::Error)
    }
}
