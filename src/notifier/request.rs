// SPDX-License-Identifier: MPL-2.0
//! Request types accepted by the notifier's toast operations.
//!
//! Requests are ephemeral: they exist for the duration of one call and are
//! resolved into a [`ToastSurface`](crate::domain::notification::ToastSurface)
//! (labels translated, delays defaulted) before being handed to the host.

use crate::domain::notification::{Callback, Placement, TextCallback, Variant};
use std::fmt;
use std::time::Duration;

/// A transient notification with optional click/close callbacks.
pub struct ToastRequest {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) on_click: Option<Callback>,
    pub(crate) on_close: Option<Callback>,
    pub(crate) placement: Option<Placement>,
    pub(crate) variant: Option<Variant>,
    pub(crate) hide_delay: Option<Duration>,
    pub(crate) persistent: bool,
    pub(crate) append: bool,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_click: None,
            on_close: None,
            placement: None,
            variant: None,
            hide_delay: None,
            persistent: false,
            append: true,
        }
    }

    /// Invoked when the body or title is clicked. The toast is dismissed
    /// first.
    #[must_use]
    pub fn on_click(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Invoked when the explicit close control is used.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Overrides the configured auto-hide delay.
    #[must_use]
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay = Some(delay);
        self
    }

    /// Keeps the toast on screen until an explicit action.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Whether the toast stacks with existing toasts on its placement
    /// (`true`, the default) or replaces them (`false`). Passed through to
    /// the host verbatim.
    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("placement", &self.placement)
            .field("variant", &self.variant)
            .field("hide_delay", &self.hide_delay)
            .field("persistent", &self.persistent)
            .field("append", &self.append)
            .finish()
    }
}

/// A toast with two explicit action controls. Both callbacks are required;
/// auto-hide fires neither.
pub struct ConfirmToastRequest {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) on_yes: Callback,
    pub(crate) on_no: Callback,
    pub(crate) placement: Option<Placement>,
    pub(crate) variant: Option<Variant>,
    pub(crate) hide_delay: Option<Duration>,
    pub(crate) append: bool,
}

impl ConfirmToastRequest {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        on_yes: impl FnOnce() + Send + 'static,
        on_no: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_yes: Box::new(on_yes),
            on_no: Box::new(on_no),
            placement: None,
            variant: None,
            hide_delay: None,
            append: true,
        }
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay = Some(delay);
        self
    }

    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}

/// A toast carrying an editable text field. The Ok callback receives the
/// final (possibly edited) text; the toast persists until an explicit
/// action.
pub struct PromptToastRequest {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) on_ok: TextCallback,
    pub(crate) on_cancel: Option<Callback>,
    pub(crate) placement: Option<Placement>,
    pub(crate) variant: Option<Variant>,
    pub(crate) append: bool,
}

impl PromptToastRequest {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        on_ok: impl FnOnce(String) + Send + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_ok: Box::new(on_ok),
            on_cancel: None,
            placement: None,
            variant: None,
            append: true,
        }
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}
