// SPDX-License-Identifier: MPL-2.0
//! Notification value objects shared between the helper core and its hosts.
//!
//! These types describe *what* should be presented: the identifier and
//! lifecycle of a toast surface, its placement and visual variant, and the
//! callback wiring for each affordance. How a surface is rendered is left
//! entirely to the [`DialogHost`](crate::application::port::dialog::DialogHost)
//! adapter that receives it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Unique identifier for a toast surface.
///
/// Identifiers are allocated from a monotonic per-notifier sequence and are
/// never reused. The textual form is a fixed prefix followed by the
/// sequence number, e.g. `toast-42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the underlying sequence number.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Surface position a toast is attached to.
///
/// Toasts on the same placement share one stack; the `append` flag of a
/// request decides whether a new toast joins or replaces that stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopRight,
    TopLeft,
    TopCenter,
    TopFull,
    #[default]
    BottomRight,
    BottomLeft,
    BottomCenter,
    BottomFull,
}

impl Placement {
    /// All placements, in rendering order.
    pub const ALL: [Placement; 8] = [
        Placement::TopRight,
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::TopFull,
        Placement::BottomRight,
        Placement::BottomLeft,
        Placement::BottomCenter,
        Placement::BottomFull,
    ];
}

/// Visual variant of a dialog or toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Success,
    Info,
    Warning,
    Danger,
}

/// Callback fired when the user activates a toast affordance.
pub type Callback = Box<dyn FnOnce() + Send>;

/// Callback fired with the final text of a prompt toast.
pub type TextCallback = Box<dyn FnOnce(String) + Send>;

/// Shared, mutable text buffer backing a prompt toast's input field.
///
/// Every input event overwrites the buffer with the field's current value,
/// so the Ok callback always observes the latest edit.
pub type PromptBuffer = Arc<Mutex<String>>;

/// Content and affordances of a toast surface.
pub enum ToastBody {
    /// Dismissible message. Clicking the body or title fires `on_click`,
    /// the explicit close control fires `on_close`.
    Plain {
        message: String,
        on_click: Option<Callback>,
        on_close: Option<Callback>,
    },
    /// Message with two explicit action controls. Auto-hide fires neither
    /// callback.
    Choice {
        message: String,
        yes_label: String,
        no_label: String,
        on_yes: Callback,
        on_no: Callback,
    },
    /// Editable text field with Ok/Cancel controls. Never auto-hides.
    Prompt {
        buffer: PromptBuffer,
        ok_label: String,
        cancel_label: String,
        on_ok: TextCallback,
        on_cancel: Option<Callback>,
    },
}

impl fmt::Debug for ToastBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastBody::Plain { message, .. } => {
                f.debug_struct("Plain").field("message", message).finish()
            }
            ToastBody::Choice {
                message,
                yes_label,
                no_label,
                ..
            } => f
                .debug_struct("Choice")
                .field("message", message)
                .field("yes_label", yes_label)
                .field("no_label", no_label)
                .finish(),
            ToastBody::Prompt {
                buffer,
                ok_label,
                cancel_label,
                ..
            } => {
                let value = buffer
                    .lock()
                    .map(|text| text.clone())
                    .unwrap_or_else(|poisoned| poisoned.into_inner().clone());
                f.debug_struct("Prompt")
                    .field("value", &value)
                    .field("ok_label", ok_label)
                    .field("cancel_label", cancel_label)
                    .finish()
            }
        }
    }
}

/// A fully resolved toast handed to the host for rendering.
///
/// Labels are already translated and the auto-hide delay already defaulted;
/// the host only renders and routes affordance events back.
#[derive(Debug)]
pub struct ToastSurface {
    pub id: ToastId,
    pub title: String,
    pub body: ToastBody,
    pub placement: Placement,
    pub variant: Variant,
    /// `None` means the toast persists until an explicit action.
    pub auto_hide: Option<Duration>,
    /// `false` replaces the existing toasts on this placement.
    pub append: bool,
}

/// A blocking acknowledgment dialog request.
#[derive(Debug, Clone)]
pub struct AlertRequest {
    pub title: String,
    pub content: String,
    pub variant: Variant,
}

/// A blocking yes/no dialog request. Labels are pre-translated.
#[derive(Debug, Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub content: String,
    pub yes_label: String,
    pub no_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_id_displays_with_prefix() {
        assert_eq!(ToastId::new(0).to_string(), "toast-0");
        assert_eq!(ToastId::new(17).to_string(), "toast-17");
    }

    #[test]
    fn toast_ids_order_by_sequence() {
        assert!(ToastId::new(1) < ToastId::new(2));
        assert_ne!(ToastId::new(1), ToastId::new(2));
    }

    #[test]
    fn default_placement_is_bottom_right() {
        assert_eq!(Placement::default(), Placement::BottomRight);
    }

    #[test]
    fn placement_serializes_kebab_case() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "placement",
            Placement::TopCenter,
        )]))
        .expect("serialize placement");
        assert!(toml.contains("top-center"));
    }

    #[test]
    fn prompt_body_debug_shows_current_value() {
        let buffer: PromptBuffer = Arc::new(Mutex::new("draft".to_string()));
        let body = ToastBody::Prompt {
            buffer: Arc::clone(&buffer),
            ok_label: "Ok".into(),
            cancel_label: "Cancel".into(),
            on_ok: Box::new(|_| {}),
            on_cancel: None,
        };
        *buffer.lock().expect("buffer lock") = "edited".to_string();
        assert!(format!("{body:?}").contains("edited"));
    }
}
