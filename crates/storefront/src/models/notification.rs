//! Transient user-facing notifications (toasts).
//!
//! Handlers push notifications into the session; the next rendered page
//! drains them, so each one is shown exactly once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::session_keys;

/// Severity of a notification, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// A message shown once to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        self.level.css_class()
    }
}

/// Queue a notification for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn push_notification(
    session: &Session,
    notification: Notification,
) -> Result<(), tower_sessions::session::Error> {
    let mut pending: Vec<Notification> = session
        .get(session_keys::NOTIFICATIONS)
        .await?
        .unwrap_or_default();
    pending.push(notification);
    session.insert(session_keys::NOTIFICATIONS, pending).await
}

/// Remove and return all pending notifications.
///
/// Session failures are logged and treated as "nothing pending"; a lost
/// toast is not worth failing a page render over.
pub async fn take_notifications(session: &Session) -> Vec<Notification> {
    match session
        .remove::<Vec<Notification>>(session_keys::NOTIFICATIONS)
        .await
    {
        Ok(pending) => pending.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read notifications from session");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_notifications_are_drained_once() {
        let session = session();
        push_notification(&session, Notification::success("Saved"))
            .await
            .unwrap();
        push_notification(&session, Notification::error("Oops"))
            .await
            .unwrap();

        let first = take_notifications(&session).await;
        assert_eq!(
            first,
            vec![Notification::success("Saved"), Notification::error("Oops")]
        );
        assert!(take_notifications(&session).await.is_empty());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Notification::error("x").css_class(), "toast--error");
        assert_eq!(Notification::success("x").css_class(), "toast--success");
    }
}
