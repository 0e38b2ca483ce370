// Copy chain: clipboard write, button feedback and notifications
//
// Triggered by copy buttons inside slides. Never touches slide state.

pub mod clipboard;
pub mod feedback;
pub mod notification;

pub use clipboard::{ClipboardWriter, CopyPath};
pub use feedback::{ButtonFeedback, ButtonId};
pub use notification::{NotificationPhase, NotificationPresenter, NotificationTiming};

/// A click on a copy button, consumed by the clipboard writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source_button: ButtonId,
    pub text: String,
}

/// Sent back to the event loop once a copy attempt finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyCompleted {
    pub source_button: ButtonId,
    pub path: CopyPath,
}
