// SPDX-License-Identifier: MPL-2.0
//! Iced adapter for the dialog port.
//!
//! [`IcedHost`] implements
//! [`DialogHost`](crate::application::port::dialog::DialogHost) on top of
//! shared interior state, so the same cheaply-cloned handle can be given
//! to a [`Notifier`](crate::notifier::Notifier) and embedded into an Iced
//! application. The application wires three things:
//!
//! ```ignore
//! // in update():
//! Message::Host(msg) => host.update(msg),
//!
//! // in view(): layer the overlay over the main content
//! iced::widget::stack![content, host.view().map(Message::Host)]
//!
//! // in subscription(): drive auto-hide timers
//! host.subscription().map(Message::Host)
//! ```
//!
//! Affordance callbacks and modal responders are resolved outside the
//! state lock, so a callback may itself call back into the notifier.

mod manager;
mod widget;

pub use manager::ModalId;

use crate::application::port::dialog::{AckResponder, ChoiceResponder, DialogHost};
use crate::domain::notification::{AlertRequest, ConfirmRequest, ToastBody, ToastId, ToastSurface};
use iced::time;
use iced::{Element, Subscription};
use manager::{Manager, Modal};
use std::sync::{Arc, Mutex, MutexGuard};

/// Events produced by the overlay widgets and the auto-hide timer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toast body or title clicked.
    BodyPressed(ToastId),
    /// Explicit close control of a plain toast.
    ClosePressed(ToastId),
    /// Affirmative control of a confirm toast.
    YesPressed(ToastId),
    /// Negative control of a confirm toast.
    NoPressed(ToastId),
    /// Input event on a prompt toast's text field.
    PromptEdited(ToastId, String),
    /// Ok control of a prompt toast.
    OkPressed(ToastId),
    /// Cancel control of a prompt toast.
    CancelPressed(ToastId),
    /// Acknowledgment dialog dismissed via its button.
    ModalAcknowledged(ModalId),
    /// Confirmation dialog resolved with an explicit choice.
    ModalChoice(ModalId, bool),
    /// Modal dialog closed without a choice (backdrop click).
    ModalDismissed(ModalId),
    /// Auto-hide timer tick.
    Tick,
}

/// Shared-state [`DialogHost`] adapter for Iced applications.
#[derive(Clone)]
pub struct IcedHost {
    state: Arc<Mutex<Manager>>,
}

impl Default for IcedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl IcedHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(Manager::default())),
        }
    }

    /// Handles an overlay event, firing the affected surface's callback
    /// or resolving the affected modal.
    pub fn update(&self, message: Message) {
        match message {
            Message::BodyPressed(id) => {
                if let Some(ToastBody::Plain {
                    on_click: Some(on_click),
                    ..
                }) = self.take_toast(id)
                {
                    on_click();
                }
            }
            Message::ClosePressed(id) => {
                if let Some(ToastBody::Plain {
                    on_close: Some(on_close),
                    ..
                }) = self.take_toast(id)
                {
                    on_close();
                }
            }
            Message::YesPressed(id) => {
                if let Some(ToastBody::Choice { on_yes, .. }) = self.take_toast(id) {
                    on_yes();
                }
            }
            Message::NoPressed(id) => {
                if let Some(ToastBody::Choice { on_no, .. }) = self.take_toast(id) {
                    on_no();
                }
            }
            Message::PromptEdited(id, text) => {
                self.lock().edit_prompt(id, text);
            }
            Message::OkPressed(id) => {
                if let Some(ToastBody::Prompt { buffer, on_ok, .. }) = self.take_toast(id) {
                    let text = match buffer.lock() {
                        Ok(value) => value.clone(),
                        Err(poisoned) => poisoned.into_inner().clone(),
                    };
                    on_ok(text);
                }
            }
            Message::CancelPressed(id) => {
                if let Some(ToastBody::Prompt {
                    on_cancel: Some(on_cancel),
                    ..
                }) = self.take_toast(id)
                {
                    on_cancel();
                }
            }
            Message::ModalAcknowledged(id) | Message::ModalDismissed(id) => {
                let modal = self.lock().take_modal(id);
                match modal {
                    Some(Modal::Acknowledge { done, .. }) => {
                        let _ = done.send(());
                    }
                    // Dropping an unresolved responder signals dismissal
                    // without a choice.
                    Some(Modal::Choose { .. }) | None => {}
                }
            }
            Message::ModalChoice(id, choice) => {
                let modal = self.lock().take_modal(id);
                if let Some(Modal::Choose { reply, .. }) = modal {
                    let _ = reply.send(Some(choice));
                }
            }
            Message::Tick => {
                // Expired surfaces are dropped; auto-hide fires no
                // callbacks.
                let expired = self.lock().expire();
                drop(expired);
            }
        }
    }

    /// Renders the toast stacks and the topmost modal as a transparent
    /// full-window overlay.
    pub fn view(&self) -> Element<'static, Message> {
        let snapshot = self.lock().snapshot();
        widget::overlay(snapshot)
    }

    /// Timer subscription driving auto-hide. Idle (no expiring toast
    /// visible) produces no subscription.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.lock().has_expiring() {
            time::every(std::time::Duration::from_millis(250)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn take_toast(&self, id: ToastId) -> Option<ToastBody> {
        self.lock().remove(id).map(|surface| surface.body)
    }

    fn lock(&self) -> MutexGuard<'_, Manager> {
        self.state.lock().expect("iced host state lock")
    }
}

impl DialogHost for IcedHost {
    fn show_acknowledgment(&self, request: AlertRequest, done: AckResponder) {
        self.lock().push_acknowledge(request, done);
    }

    fn show_confirmation(&self, request: ConfirmRequest, reply: ChoiceResponder) {
        self.lock().push_choose(request, reply);
    }

    fn show_toast(&self, surface: ToastSurface) {
        self.lock().insert(surface);
    }

    fn dismiss_toast(&self, id: ToastId) {
        let surface = self.lock().remove(id);
        drop(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::{Placement, Variant};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn choice_surface(id: u64, yes_flag: Arc<AtomicBool>, no_flag: Arc<AtomicBool>) -> ToastSurface {
        ToastSurface {
            id: ToastId::new(id),
            title: "t".into(),
            body: ToastBody::Choice {
                message: "m".into(),
                yes_label: "Open".into(),
                no_label: "Close".into(),
                on_yes: Box::new(move || yes_flag.store(true, Ordering::SeqCst)),
                on_no: Box::new(move || no_flag.store(true, Ordering::SeqCst)),
            },
            placement: Placement::BottomRight,
            variant: Variant::Success,
            auto_hide: None,
            append: true,
        }
    }

    #[test]
    fn yes_press_fires_only_yes_callback() {
        let host = IcedHost::new();
        let yes = Arc::new(AtomicBool::new(false));
        let no = Arc::new(AtomicBool::new(false));
        host.show_toast(choice_surface(0, Arc::clone(&yes), Arc::clone(&no)));

        host.update(Message::YesPressed(ToastId::new(0)));

        assert!(yes.load(Ordering::SeqCst));
        assert!(!no.load(Ordering::SeqCst));
        // The surface is gone; a second press is a no-op.
        host.update(Message::NoPressed(ToastId::new(0)));
        assert!(!no.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn acknowledged_modal_resolves_caller() {
        let host = IcedHost::new();
        let (done, dismissed) = tokio::sync::oneshot::channel();
        host.show_acknowledgment(
            AlertRequest {
                title: "t".into(),
                content: "c".into(),
                variant: Variant::Success,
            },
            done,
        );

        host.update(Message::ModalAcknowledged(first_modal_id(&host)));
        assert!(dismissed.await.is_ok());
    }

    #[tokio::test]
    async fn dismissed_confirmation_yields_no_choice() {
        let host = IcedHost::new();
        let (reply, choice) = tokio::sync::oneshot::channel();
        host.show_confirmation(
            ConfirmRequest {
                title: "t".into(),
                content: "c".into(),
                yes_label: "Yes".into(),
                no_label: "No".into(),
            },
            reply,
        );

        host.update(Message::ModalDismissed(first_modal_id(&host)));
        assert_eq!(choice.await.unwrap_or(None), None);
    }

    fn first_modal_id(host: &IcedHost) -> ModalId {
        match host.lock().snapshot().modal {
            Some(manager::ModalView::Acknowledge { id, .. })
            | Some(manager::ModalView::Choose { id, .. }) => id,
            None => panic!("no modal open"),
        }
    }
}
