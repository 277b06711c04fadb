// SPDX-License-Identifier: MPL-2.0
//! Dialog and toast presentation port.
//!
//! A [`DialogHost`] renders the surfaces the notifier requests and routes
//! user actions back. Two primitives are blocking from the caller's point
//! of view (acknowledgment and confirmation) and resolve through oneshot
//! responders; toast primitives are fire-and-forget.

use crate::domain::notification::{AlertRequest, ConfirmRequest, ToastId, ToastSurface};
use tokio::sync::oneshot;

/// Responder for an acknowledgment dialog.
///
/// The host sends `()` exactly once when the dialog is dismissed. Dropping
/// the responder is treated as dismissal as well.
pub type AckResponder = oneshot::Sender<()>;

/// Responder for a confirmation dialog.
///
/// The host sends `Some(true)` on an affirmative action, `Some(false)` on
/// an explicit decline. Dropping the responder (or sending `None`) signals
/// that the dialog was dismissed without a choice.
pub type ChoiceResponder = oneshot::Sender<Option<bool>>;

/// Capability interface for whatever UI layer actually presents dialogs
/// and toasts.
///
/// Implementations must not block inside these methods: they register the
/// surface and return, resolving responders later when the user acts.
pub trait DialogHost: Send + Sync {
    /// Whether this host can present blocking modal dialogs.
    ///
    /// When `false`, the notifier degrades `alert`/`confirm` to a
    /// synchronous native message box instead of calling
    /// [`show_acknowledgment`](Self::show_acknowledgment) or
    /// [`show_confirmation`](Self::show_confirmation).
    fn supports_modals(&self) -> bool {
        true
    }

    /// Presents a blocking acknowledgment dialog.
    fn show_acknowledgment(&self, request: AlertRequest, done: AckResponder);

    /// Presents a blocking yes/no dialog.
    fn show_confirmation(&self, request: ConfirmRequest, reply: ChoiceResponder);

    /// Presents a toast surface. Never blocks.
    fn show_toast(&self, surface: ToastSurface);

    /// Retires a toast surface by identifier, firing no callbacks.
    ///
    /// Unknown identifiers are ignored; a toast may already have been
    /// dismissed by the user or an auto-hide timer.
    fn dismiss_toast(&self, id: ToastId);
}
