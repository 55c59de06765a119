//! Non-blocking user notices raised by screen state machines

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast-style notification with a static, screen-specific message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    pub const fn success(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
