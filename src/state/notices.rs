//! Snackbar-style user notices.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Severity of a user-facing notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Warning,
    Success,
}

/// A single displayed notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub message: String,
}

/// Queue of live notices; they persist until dismissed.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
}

impl NoticeState {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            id: uuid::Uuid::new_v4().to_string(),
            level,
            message: message.into(),
        });
    }

    /// Push unless an identical message is already displayed, so repeated
    /// failures do not stack the same notice.
    pub fn push_unique(&mut self, level: NoticeLevel, message: &str) {
        if !self.notices.iter().any(|n| n.message == message) {
            self.push(level, message);
        }
    }

    pub fn dismiss(&mut self, id: &str) {
        self.notices.retain(|n| n.id != id);
    }
}
