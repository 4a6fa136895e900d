//! In-process channel used when the host does not bind its own surface.

use super::Channel;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct ChannelState {
    lines: Vec<String>,
    visible: bool,
    reveals: usize,
    last_preserve_focus: Option<bool>,
    disposed: bool,
}

/// Cloning yields another handle to the same surface, so a host (or a test)
/// can keep one while the logger owns the other.
#[derive(Debug, Clone)]
pub struct MemoryChannel {
    name: String,
    state: Arc<Mutex<ChannelState>>,
}

impl MemoryChannel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::default(),
        }
    }

    /// Current content, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.clone()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    /// How many times `show` has been called.
    #[must_use]
    pub fn reveal_count(&self) -> usize {
        self.lock().reveals
    }

    /// Focus flag of the most recent `show`, if any.
    #[must_use]
    pub fn last_preserve_focus(&self) -> Option<bool> {
        self.lock().last_preserve_focus
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    fn lock(&self) -> MutexGuard<'_, ChannelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Channel for MemoryChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn append_line(&self, line: &str) -> Result<(), crate::Error> {
        let mut state = self.lock();
        if !state.disposed {
            state.lines.push(line.to_string());
        }
        Ok(())
    }

    fn show(&self, preserve_focus: bool) {
        let mut state = self.lock();
        if state.disposed {
            return;
        }
        state.visible = true;
        state.reveals += 1;
        state.last_preserve_focus = Some(preserve_focus);
    }

    fn clear(&self) {
        let mut state = self.lock();
        if !state.disposed {
            state.lines.clear();
        }
    }

    fn dispose(&self) {
        let mut state = self.lock();
        state.disposed = true;
        state.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_content() {
        let channel = MemoryChannel::new("App");
        let handle = channel.clone();
        channel.append_line("one").unwrap();
        assert_eq!(handle.lines(), vec!["one"]);
        assert_eq!(handle.name(), "App");
    }

    #[test]
    fn disposed_channel_drops_appends_and_reveals() {
        let channel = MemoryChannel::new("App");
        channel.dispose();
        channel.append_line("late").unwrap();
        channel.show(true);
        assert!(channel.lines().is_empty());
        assert_eq!(channel.reveal_count(), 0);
        assert!(channel.is_disposed());
    }

    #[test]
    fn disposed_channel_keeps_its_content_on_clear() {
        let channel = MemoryChannel::new("App");
        channel.append_line("kept").unwrap();
        channel.dispose();
        channel.clear();
        assert_eq!(channel.lines(), vec!["kept"]);
    }
}
