//! Scriptable notifier for tests and headless hosts.

use super::notify::{Notification, Notifier, NotifyError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Default)]
enum Response {
    #[default]
    Dismiss,
    Select(String),
    Fail(String),
}

#[derive(Debug, Default)]
struct Inner {
    notifications: Mutex<Vec<Notification>>,
    call_count: AtomicUsize,
    response: Response,
}

/// Records every notification and answers with a fixed response.
///
/// Clones share the record, so a test can keep a handle after passing one to the builder.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    inner: Arc<Inner>,
}

impl MockNotifier {
    /// Every notification is dismissed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification is answered by choosing `action`.
    #[must_use]
    pub fn selecting(action: impl Into<String>) -> Self {
        Self::with_response(Response::Select(action.into()))
    }

    /// Every notification fails to present with `cause`.
    #[must_use]
    pub fn failing(cause: impl Into<String>) -> Self {
        Self::with_response(Response::Fail(cause.into()))
    }

    fn with_response(response: Response) -> Self {
        Self {
            inner: Arc::new(Inner {
                response,
                ..Inner::default()
            }),
        }
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.inner.call_count.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner
            .notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, notification: &Notification) -> Result<Option<String>, NotifyError> {
        self.inner
            .notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        self.inner.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.inner.response {
            Response::Dismiss => Ok(None),
            Response::Select(action) => Ok(Some(action.clone())),
            Response::Fail(cause) => Err(NotifyError::Presentation(cause.clone())),
        }
    }
}
