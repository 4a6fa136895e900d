//! Sinks a rendered record can land in. Files are owned by the crate; the channel
//! and notifier are host surfaces behind traits so embedders can bind their own.

mod channel;
mod console;
mod file;
pub mod mock;
mod notify;

pub use channel::MemoryChannel;
pub use console::ConsoleOutput;
pub use file::FileOutput;
pub use mock::MockNotifier;
pub use notify::{ConsoleNotifier, Notification, Notifier, NotifyError, OPEN_OUTPUT};

/// Persistent, user-visible, append-only text surface.
///
/// `Send + Sync` so the notification worker can reveal the channel from another thread.
pub trait Channel: Send + Sync {
    /// The identity the channel was created with.
    fn name(&self) -> &str;

    /// Appends one entry.
    ///
    /// # Errors
    /// Host-specific failures writing to the surface.
    fn append_line(&self, line: &str) -> Result<(), crate::Error>;

    /// Brings the channel into view.
    fn show(&self, preserve_focus: bool);

    /// Drops the visible content.
    fn clear(&self);

    /// Releases the surface; later appends are discarded.
    fn dispose(&self);
}
