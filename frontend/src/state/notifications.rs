use crate::api::{ApiError, FailureKind};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn classes(&self) -> &'static str {
        match self {
            NotificationKind::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            NotificationKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
            NotificationKind::Warning => {
                "bg-status-warning-bg border-status-warning-border text-status-warning-text"
            }
            NotificationKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Info => "fa-info-circle",
            NotificationKind::Warning => "fa-exclamation-triangle",
            NotificationKind::Error => "fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

/// Oldest entries are dropped once the stack grows past this.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Page-scoped notification service. Pages receive it through context so
/// tests and hosts can supply their own instance.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    entries: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn notify(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> u64 {
        let title = title.into();
        let message = message.into();
        let repeated = self.entries.with_untracked(|entries| {
            entries
                .iter()
                .find(|n| n.kind == kind && n.title == title && n.message == message)
                .map(|n| n.id)
        });
        if let Some(id) = repeated {
            // Repeats resurface the existing entry.
            self.entries.update(|entries| {
                if let Some(pos) = entries.iter().position(|n| n.id == id) {
                    let existing = entries.remove(pos);
                    entries.push(existing);
                }
            });
            return id;
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let notification = Notification {
            id,
            title,
            message,
            kind,
        };
        self.entries.update(|entries| {
            entries.push(notification);
            if entries.len() > MAX_NOTIFICATIONS {
                let overflow = entries.len() - MAX_NOTIFICATIONS;
                entries.drain(..overflow);
            }
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(NotificationKind::Success, "Notification", message)
    }

    pub fn api_error(&self, error: &ApiError) -> u64 {
        self.notify(NotificationKind::Error, error_title(error), error.error.clone())
    }

    pub fn dismiss(&self, id: u64) {
        self.entries
            .update(|entries| entries.retain(|notification| notification.id != id));
    }

    pub fn clear(&self) {
        self.entries.update(Vec::clear);
    }

    pub fn entries(&self) -> Signal<Vec<Notification>> {
        self.entries.into()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries.get_untracked()
    }
}

pub fn error_title(error: &ApiError) -> &'static str {
    match error.kind() {
        FailureKind::Transport => "Network error",
        FailureKind::Server => "Server error",
        FailureKind::Malformed => "Unexpected response",
        FailureKind::Validation => "Action not allowed",
        FailureKind::Unknown => "Error",
    }
}

pub fn provide_notifications() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().unwrap_or_else(provide_notifications)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notify_and_dismiss_keep_ids_unique() {
        with_runtime(|| {
            let center = NotificationCenter::new();
            let first = center.success("saved");
            let second = center.api_error(&ApiError::request_failed("offline"));
            assert_ne!(first, second);

            let entries = center.snapshot();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].kind, NotificationKind::Success);
            assert_eq!(entries[1].title, "Network error");
            assert_eq!(entries[1].message, "offline");

            center.dismiss(first);
            let third = center.success("again");
            assert!(third > second);
            let ids: Vec<u64> = center.snapshot().iter().map(|n| n.id).collect();
            assert_eq!(ids, vec![second, third]);

            center.clear();
            assert!(center.snapshot().is_empty());
        });
    }

    #[test]
    fn use_notifications_reuses_context() {
        with_runtime(|| {
            let provided = provide_notifications();
            provided.success("from context");
            let used = use_notifications();
            assert_eq!(used.snapshot().len(), 1);
        });
    }

    #[test]
    fn error_titles_follow_failure_kind() {
        assert_eq!(error_title(&ApiError::server(500, "x")), "Server error");
        assert_eq!(error_title(&ApiError::malformed("x")), "Unexpected response");
        assert_eq!(error_title(&ApiError::validation("x")), "Action not allowed");
        assert_eq!(error_title(&ApiError::unknown("x")), "Error");
    }

    #[test]
    fn repeated_notifications_collapse_and_stack_is_capped() {
        with_runtime(|| {
            let center = NotificationCenter::new();
            let offline = ApiError::request_failed("Request failed: offline");
            let first = center.api_error(&offline);
            center.success("saved");
            let again = center.api_error(&offline);
            assert_eq!(first, again);

            let entries = center.snapshot();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[1].id, first);

            for i in 0..10 {
                center.success(format!("message {}", i));
            }
            let entries = center.snapshot();
            assert_eq!(entries.len(), MAX_NOTIFICATIONS);
            assert_eq!(entries.last().map(|n| n.message.as_str()), Some("message 9"));
            assert!(entries.iter().all(|n| n.id != first));
        });
    }
}
