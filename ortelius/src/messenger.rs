//! Notifications from the viewer core to the host UI.

use maybe_sync::{MaybeSend, MaybeSync};

/// Callback the viewer uses to tell the host UI that its state changed and
/// the rendered list or map should be redrawn.
pub trait Messenger: MaybeSend + MaybeSync {
    /// Request the host UI to redraw.
    fn request_redraw(&self);
}

/// A [`Messenger`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn request_redraw(&self) {}
}
