//! Transient user-facing notices.

use std::time::Duration;

use serde::Serialize;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NoticeKind {
    /// Neutral information.
    #[default]
    Info,
    /// A non-fatal hint about the selection or request.
    Advisory,
    /// A node could not be styled.
    Failure,
}

/// A non-blocking, transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Text to display.
    pub text: String,
    /// How long to show the notice; `None` uses the host default.
    pub timeout: Option<Duration>,
    /// Presentation hint.
    pub kind: NoticeKind,
}

impl Notice {
    /// Create an informational notice.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timeout: None,
            kind: NoticeKind::Info,
        }
    }

    /// Create an advisory notice.
    pub fn advisory(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Advisory,
            ..Self::info(text)
        }
    }

    /// Create a failure notice.
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            ..Self::info(text)
        }
    }

    /// Set how long the notice stays visible.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Host primitive for showing transient notices.
pub trait Notifier {
    /// Show a notice. Must not block.
    fn notify(&mut self, notice: Notice);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Notice::info("a").kind, NoticeKind::Info);
        assert_eq!(Notice::advisory("b").kind, NoticeKind::Advisory);
        assert_eq!(Notice::failure("c").kind, NoticeKind::Failure);
    }

    #[test]
    fn vec_collects_notices() {
        let mut sink: Vec<Notice> = Vec::new();
        sink.notify(Notice::advisory("select a frame").with_timeout(Duration::from_secs(3)));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].timeout, Some(Duration::from_secs(3)));
    }
}
