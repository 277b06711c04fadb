// SPDX-License-Identifier: MPL-2.0
//! Surface lifecycle management for the Iced host.
//!
//! The `Manager` owns the toast stacks and the modal queue: it limits the
//! number of visible toasts, promotes queued ones when space frees up,
//! expires auto-hide timers, and hands surfaces back to the adapter when
//! an affordance consumes them. It performs no rendering and invokes no
//! callbacks itself, which keeps it directly unit-testable.

use crate::application::port::dialog::{AckResponder, ChoiceResponder};
use crate::domain::notification::{
    AlertRequest, ConfirmRequest, Placement, ToastBody, ToastId, ToastSurface, Variant,
};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts visible at once; the rest wait in the queue.
pub(super) const MAX_VISIBLE: usize = 3;

/// Host-local identifier for a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

pub(super) struct ActiveToast {
    pub(super) surface: ToastSurface,
    shown_at: Instant,
}

impl ActiveToast {
    fn expired(&self) -> bool {
        self.surface
            .auto_hide
            .is_some_and(|delay| self.shown_at.elapsed() >= delay)
    }
}

/// A modal dialog waiting for a user decision, together with its
/// responder.
pub(super) enum Modal {
    Acknowledge {
        id: ModalId,
        request: AlertRequest,
        done: AckResponder,
    },
    Choose {
        id: ModalId,
        request: ConfirmRequest,
        reply: ChoiceResponder,
    },
}

impl Modal {
    fn id(&self) -> ModalId {
        match self {
            Modal::Acknowledge { id, .. } | Modal::Choose { id, .. } => *id,
        }
    }
}

#[derive(Default)]
pub(super) struct Manager {
    /// Currently visible toasts, oldest first.
    visible: VecDeque<ActiveToast>,
    /// Toasts waiting for a visible slot.
    queue: VecDeque<ActiveToast>,
    /// Open modal dialogs, oldest first; the newest renders on top.
    modals: Vec<Modal>,
    modal_seq: u64,
}

impl Manager {
    /// Accepts a new toast surface.
    ///
    /// A surface with `append == false` first retires every toast on the
    /// same placement (their callbacks never fire). The surface becomes
    /// visible immediately when a slot is free, otherwise it queues.
    pub(super) fn insert(&mut self, surface: ToastSurface) {
        if !surface.append {
            let placement = surface.placement;
            self.visible
                .retain(|toast| toast.surface.placement != placement);
            self.queue
                .retain(|toast| toast.surface.placement != placement);
        }
        let entry = ActiveToast {
            surface,
            shown_at: Instant::now(),
        };
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(entry);
        } else {
            self.queue.push_back(entry);
        }
    }

    /// Removes a toast by id, returning its surface so the adapter can
    /// fire the appropriate callback.
    pub(super) fn remove(&mut self, id: ToastId) -> Option<ToastSurface> {
        if let Some(pos) = self.visible.iter().position(|t| t.surface.id == id) {
            let entry = self.visible.remove(pos).map(|t| t.surface);
            self.promote();
            return entry;
        }
        if let Some(pos) = self.queue.iter().position(|t| t.surface.id == id) {
            return self.queue.remove(pos).map(|t| t.surface);
        }
        None
    }

    /// Retires every visible toast whose auto-hide delay has elapsed.
    ///
    /// The surfaces are returned for the adapter to drop; expiry fires no
    /// callbacks.
    pub(super) fn expire(&mut self) -> Vec<ToastSurface> {
        let mut expired = Vec::new();
        while let Some(pos) = self.visible.iter().position(ActiveToast::expired) {
            if let Some(entry) = self.visible.remove(pos) {
                expired.push(entry.surface);
            }
        }
        if !expired.is_empty() {
            self.promote();
        }
        expired
    }

    /// Overwrites the buffer of the prompt toast with the given id.
    pub(super) fn edit_prompt(&mut self, id: ToastId, text: String) {
        let entry = self
            .visible
            .iter()
            .chain(self.queue.iter())
            .find(|t| t.surface.id == id);
        if let Some(entry) = entry {
            if let ToastBody::Prompt { buffer, .. } = &entry.surface.body {
                match buffer.lock() {
                    Ok(mut value) => *value = text,
                    Err(poisoned) => *poisoned.into_inner() = text,
                }
            }
        }
    }

    pub(super) fn push_acknowledge(&mut self, request: AlertRequest, done: AckResponder) {
        let id = self.next_modal_id();
        self.modals.push(Modal::Acknowledge { id, request, done });
    }

    pub(super) fn push_choose(&mut self, request: ConfirmRequest, reply: ChoiceResponder) {
        let id = self.next_modal_id();
        self.modals.push(Modal::Choose { id, request, reply });
    }

    /// Takes a modal out of the queue so its responder can be resolved.
    pub(super) fn take_modal(&mut self, id: ModalId) -> Option<Modal> {
        let pos = self.modals.iter().position(|modal| modal.id() == id)?;
        Some(self.modals.remove(pos))
    }

    /// Whether any visible toast still carries an auto-hide timer.
    pub(super) fn has_expiring(&self) -> bool {
        self.visible
            .iter()
            .any(|toast| toast.surface.auto_hide.is_some())
    }

    pub(super) fn snapshot(&self) -> Snapshot {
        Snapshot {
            toasts: self.visible.iter().map(|t| toast_view(&t.surface)).collect(),
            modal: self.modals.last().map(modal_view),
        }
    }

    #[cfg(test)]
    pub(super) fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[cfg(test)]
    pub(super) fn queued_count(&self) -> usize {
        self.queue.len()
    }

    fn promote(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(mut entry) = self.queue.pop_front() {
                entry.shown_at = Instant::now();
                self.visible.push_back(entry);
            } else {
                break;
            }
        }
    }

    fn next_modal_id(&mut self) -> ModalId {
        let id = ModalId(self.modal_seq);
        self.modal_seq += 1;
        id
    }
}

/// Owned view data for one visible toast.
pub(super) struct ToastView {
    pub id: ToastId,
    pub title: String,
    pub placement: Placement,
    pub variant: Variant,
    pub body: BodyView,
}

pub(super) enum BodyView {
    Plain {
        message: String,
    },
    Choice {
        message: String,
        yes_label: String,
        no_label: String,
    },
    Prompt {
        value: String,
        ok_label: String,
        cancel_label: String,
    },
}

pub(super) enum ModalView {
    Acknowledge {
        id: ModalId,
        title: String,
        content: String,
        variant: Variant,
    },
    Choose {
        id: ModalId,
        title: String,
        content: String,
        yes_label: String,
        no_label: String,
    },
}

pub(super) struct Snapshot {
    pub toasts: Vec<ToastView>,
    pub modal: Option<ModalView>,
}

fn toast_view(surface: &ToastSurface) -> ToastView {
    let body = match &surface.body {
        ToastBody::Plain { message, .. } => BodyView::Plain {
            message: message.clone(),
        },
        ToastBody::Choice {
            message,
            yes_label,
            no_label,
            ..
        } => BodyView::Choice {
            message: message.clone(),
            yes_label: yes_label.clone(),
            no_label: no_label.clone(),
        },
        ToastBody::Prompt {
            buffer,
            ok_label,
            cancel_label,
            ..
        } => BodyView::Prompt {
            value: buffer
                .lock()
                .map(|value| value.clone())
                .unwrap_or_else(|poisoned| poisoned.into_inner().clone()),
            ok_label: ok_label.clone(),
            cancel_label: cancel_label.clone(),
        },
    };
    ToastView {
        id: surface.id,
        title: surface.title.clone(),
        placement: surface.placement,
        variant: surface.variant,
        body,
    }
}

fn modal_view(modal: &Modal) -> ModalView {
    match modal {
        Modal::Acknowledge { id, request, .. } => ModalView::Acknowledge {
            id: *id,
            title: request.title.clone(),
            content: request.content.clone(),
            variant: request.variant,
        },
        Modal::Choose { id, request, .. } => ModalView::Choose {
            id: *id,
            title: request.title.clone(),
            content: request.content.clone(),
            yes_label: request.yes_label.clone(),
            no_label: request.no_label.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn plain(id: u64) -> ToastSurface {
        plain_on(id, Placement::BottomRight, true)
    }

    fn plain_on(id: u64, placement: Placement, append: bool) -> ToastSurface {
        ToastSurface {
            id: ToastId::new(id),
            title: format!("title-{id}"),
            body: ToastBody::Plain {
                message: format!("message-{id}"),
                on_click: None,
                on_close: None,
            },
            placement,
            variant: Variant::Success,
            auto_hide: Some(Duration::from_secs(5)),
            append,
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn insert_queues_when_visible_is_full() {
        let mut manager = Manager::default();
        for id in 0..MAX_VISIBLE as u64 {
            manager.insert(plain(id));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.insert(plain(99));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn remove_promotes_from_queue() {
        let mut manager = Manager::default();
        for id in 0..=MAX_VISIBLE as u64 {
            manager.insert(plain(id));
        }
        assert_eq!(manager.queued_count(), 1);

        let removed = manager.remove(ToastId::new(0));
        assert!(removed.is_some());
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn remove_unknown_id_returns_none() {
        let mut manager = Manager::default();
        manager.insert(plain(1));
        assert!(manager.remove(ToastId::new(42)).is_none());
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn replace_retires_same_placement_only() {
        let mut manager = Manager::default();
        manager.insert(plain_on(0, Placement::BottomRight, true));
        manager.insert(plain_on(1, Placement::TopLeft, true));

        manager.insert(plain_on(2, Placement::BottomRight, false));

        let snapshot = manager.snapshot();
        let ids: Vec<_> = snapshot.toasts.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn expire_retires_elapsed_toasts() {
        let mut manager = Manager::default();
        let mut surface = plain(0);
        surface.auto_hide = Some(Duration::ZERO);
        manager.insert(surface);
        manager.insert(plain(1));

        let expired = manager.expire();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, ToastId::new(0));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn persistent_toast_never_expires() {
        let mut manager = Manager::default();
        let mut surface = plain(0);
        surface.auto_hide = None;
        manager.insert(surface);

        assert!(manager.expire().is_empty());
        assert!(!manager.has_expiring());
    }

    #[test]
    fn edit_prompt_overwrites_buffer() {
        let buffer = Arc::new(Mutex::new("abc".to_string()));
        let mut manager = Manager::default();
        manager.insert(ToastSurface {
            id: ToastId::new(0),
            title: "t".into(),
            body: ToastBody::Prompt {
                buffer: Arc::clone(&buffer),
                ok_label: "Ok".into(),
                cancel_label: "Cancel".into(),
                on_ok: Box::new(|_| {}),
                on_cancel: None,
            },
            placement: Placement::BottomRight,
            variant: Variant::Success,
            auto_hide: None,
            append: true,
        });

        manager.edit_prompt(ToastId::new(0), "xyz".to_string());
        assert_eq!(*buffer.lock().unwrap(), "xyz");
    }

    #[test]
    fn newest_modal_renders_on_top() {
        let mut manager = Manager::default();
        let (done_a, _rx_a) = tokio::sync::oneshot::channel();
        let (done_b, _rx_b) = tokio::sync::oneshot::channel();
        manager.push_acknowledge(
            AlertRequest {
                title: "first".into(),
                content: "a".into(),
                variant: Variant::Success,
            },
            done_a,
        );
        manager.push_acknowledge(
            AlertRequest {
                title: "second".into(),
                content: "b".into(),
                variant: Variant::Success,
            },
            done_b,
        );

        match manager.snapshot().modal {
            Some(ModalView::Acknowledge { title, .. }) => assert_eq!(title, "second"),
            _ => panic!("expected acknowledge modal"),
        }
    }

    #[test]
    fn take_modal_removes_it() {
        let mut manager = Manager::default();
        let (done, _rx) = tokio::sync::oneshot::channel();
        manager.push_acknowledge(
            AlertRequest {
                title: "t".into(),
                content: "c".into(),
                variant: Variant::Success,
            },
            done,
        );
        let id = match manager.snapshot().modal {
            Some(ModalView::Acknowledge { id, .. }) => id,
            _ => panic!("expected acknowledge modal"),
        };

        assert!(manager.take_modal(id).is_some());
        assert!(manager.take_modal(id).is_none());
        assert!(manager.snapshot().modal.is_none());
    }
}
