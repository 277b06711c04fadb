// SPDX-License-Identifier: MPL-2.0
//! Test support: scripted implementations of the dialog and navigation
//! ports.
//!
//! [`MockHost`] records every request it receives and exposes the same
//! affordances a rendering host would offer (dismiss an alert, resolve a
//! confirmation, press a toast control, edit a prompt), so helper
//! behaviour can be driven deterministically without a UI.

use crate::application::port::dialog::{AckResponder, ChoiceResponder, DialogHost};
use crate::application::port::navigation::{NavTarget, Navigator};
use crate::domain::notification::{
    AlertRequest, ConfirmRequest, Placement, ToastBody, ToastId, ToastSurface, Variant,
};
use crate::error::{Error, Result};
use std::sync::Mutex;
use std::time::Duration;

struct OpenAlert {
    title: String,
    content: String,
    done: Option<AckResponder>,
}

struct OpenConfirm {
    title: String,
    content: String,
    yes_label: String,
    no_label: String,
    reply: Option<ChoiceResponder>,
}

#[derive(Default)]
struct MockState {
    alerts: Vec<OpenAlert>,
    confirms: Vec<OpenConfirm>,
    toasts: Vec<ToastSurface>,
    dismissed: Vec<ToastId>,
}

/// Owned snapshot of a toast surface, safe to assert on after the surface
/// itself has been consumed by an affordance.
#[derive(Debug, Clone)]
pub struct MockToast {
    pub id: ToastId,
    pub title: String,
    /// Body message; for prompt toasts, the buffer's current value.
    pub message: String,
    pub placement: Placement,
    pub variant: Variant,
    pub auto_hide: Option<Duration>,
    pub append: bool,
    pub yes_label: Option<String>,
    pub no_label: Option<String>,
    pub ok_label: Option<String>,
    pub cancel_label: Option<String>,
}

/// A [`DialogHost`] double that records requests and lets tests play the
/// user's part.
///
/// Indices refer to arrival order. Alerts and confirmations stay in their
/// lists after resolution (with their responders consumed); toasts are
/// removed when dismissed, mirroring a real toast stack.
pub struct MockHost {
    state: Mutex<MockState>,
    modals: bool,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
            modals: true,
        }
    }

    /// A host without modal capability, forcing the notifier's native
    /// fallback path.
    #[must_use]
    pub fn without_modals() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
            modals: false,
        }
    }

    /// Number of acknowledgment dialogs opened so far (resolved or not).
    pub fn alert_count(&self) -> usize {
        self.state.lock().expect("mock state").alerts.len()
    }

    /// Title and content of the alert at `index`.
    pub fn alert(&self, index: usize) -> (String, String) {
        let state = self.state.lock().expect("mock state");
        let alert = &state.alerts[index];
        (alert.title.clone(), alert.content.clone())
    }

    /// Number of alerts still awaiting dismissal.
    pub fn open_alert_count(&self) -> usize {
        self.state
            .lock()
            .expect("mock state")
            .alerts
            .iter()
            .filter(|alert| alert.done.is_some())
            .count()
    }

    /// Dismisses the alert at `index`, resolving its caller.
    pub fn dismiss_alert(&self, index: usize) {
        let done = self.state.lock().expect("mock state").alerts[index]
            .done
            .take();
        if let Some(done) = done {
            let _ = done.send(());
        }
    }

    pub fn confirm_count(&self) -> usize {
        self.state.lock().expect("mock state").confirms.len()
    }

    pub fn confirm(&self, index: usize) -> (String, String) {
        let state = self.state.lock().expect("mock state");
        let confirm = &state.confirms[index];
        (confirm.title.clone(), confirm.content.clone())
    }

    pub fn confirm_labels(&self, index: usize) -> (String, String) {
        let state = self.state.lock().expect("mock state");
        let confirm = &state.confirms[index];
        (confirm.yes_label.clone(), confirm.no_label.clone())
    }

    /// Resolves the confirmation at `index` with an explicit choice.
    pub fn resolve_confirm(&self, index: usize, choice: bool) {
        let reply = self.state.lock().expect("mock state").confirms[index]
            .reply
            .take();
        if let Some(reply) = reply {
            let _ = reply.send(Some(choice));
        }
    }

    /// Closes the confirmation at `index` without a choice (drops the
    /// responder).
    pub fn abandon_confirm(&self, index: usize) {
        let reply = self.state.lock().expect("mock state").confirms[index]
            .reply
            .take();
        drop(reply);
    }

    pub fn toast_count(&self) -> usize {
        self.state.lock().expect("mock state").toasts.len()
    }

    /// Snapshot of the toast at `index` (arrival order among live
    /// toasts).
    pub fn toast(&self, index: usize) -> MockToast {
        let state = self.state.lock().expect("mock state");
        snapshot(&state.toasts[index])
    }

    /// Identifiers of toasts retired via [`DialogHost::dismiss_toast`] or
    /// an affordance.
    pub fn dismissed(&self) -> Vec<ToastId> {
        self.state.lock().expect("mock state").dismissed.clone()
    }

    /// Clicks the body/title of the toast at `index`.
    pub fn press_body(&self, index: usize) {
        let surface = self.take_toast(index);
        if let ToastBody::Plain { on_click, .. } = surface.body {
            if let Some(on_click) = on_click {
                on_click();
            }
        }
    }

    /// Uses the explicit close control of the toast at `index`.
    pub fn press_close(&self, index: usize) {
        let surface = self.take_toast(index);
        if let ToastBody::Plain { on_close, .. } = surface.body {
            if let Some(on_close) = on_close {
                on_close();
            }
        }
    }

    pub fn press_yes(&self, index: usize) {
        let surface = self.take_toast(index);
        if let ToastBody::Choice { on_yes, .. } = surface.body {
            on_yes();
        }
    }

    pub fn press_no(&self, index: usize) {
        let surface = self.take_toast(index);
        if let ToastBody::Choice { on_no, .. } = surface.body {
            on_no();
        }
    }

    /// Simulates an input event on the prompt toast at `index`,
    /// overwriting its buffer.
    pub fn edit_prompt(&self, index: usize, text: impl Into<String>) {
        let state = self.state.lock().expect("mock state");
        if let ToastBody::Prompt { buffer, .. } = &state.toasts[index].body {
            *buffer.lock().expect("prompt buffer") = text.into();
        }
    }

    pub fn press_ok(&self, index: usize) {
        let surface = self.take_toast(index);
        if let ToastBody::Prompt { buffer, on_ok, .. } = surface.body {
            let text = buffer.lock().expect("prompt buffer").clone();
            on_ok(text);
        }
    }

    pub fn press_cancel(&self, index: usize) {
        let surface = self.take_toast(index);
        if let ToastBody::Prompt { on_cancel, .. } = surface.body {
            if let Some(on_cancel) = on_cancel {
                on_cancel();
            }
        }
    }

    /// Lets the auto-hide timer of the toast at `index` elapse: the toast
    /// is retired and no callback fires.
    pub fn expire(&self, index: usize) {
        let surface = self.take_toast(index);
        drop(surface);
    }

    fn take_toast(&self, index: usize) -> ToastSurface {
        let mut state = self.state.lock().expect("mock state");
        let surface = state.toasts.remove(index);
        state.dismissed.push(surface.id);
        surface
    }
}

impl DialogHost for MockHost {
    fn supports_modals(&self) -> bool {
        self.modals
    }

    fn show_acknowledgment(&self, request: AlertRequest, done: AckResponder) {
        self.state.lock().expect("mock state").alerts.push(OpenAlert {
            title: request.title,
            content: request.content,
            done: Some(done),
        });
    }

    fn show_confirmation(&self, request: ConfirmRequest, reply: ChoiceResponder) {
        self.state
            .lock()
            .expect("mock state")
            .confirms
            .push(OpenConfirm {
                title: request.title,
                content: request.content,
                yes_label: request.yes_label,
                no_label: request.no_label,
                reply: Some(reply),
            });
    }

    fn show_toast(&self, surface: ToastSurface) {
        let mut state = self.state.lock().expect("mock state");
        if !surface.append {
            let placement = surface.placement;
            let mut index = 0;
            while index < state.toasts.len() {
                if state.toasts[index].placement == placement {
                    let replaced = state.toasts.remove(index);
                    state.dismissed.push(replaced.id);
                } else {
                    index += 1;
                }
            }
        }
        state.toasts.push(surface);
    }

    fn dismiss_toast(&self, id: ToastId) {
        let mut state = self.state.lock().expect("mock state");
        if let Some(index) = state.toasts.iter().position(|toast| toast.id == id) {
            state.toasts.remove(index);
            state.dismissed.push(id);
        }
    }
}

fn snapshot(surface: &ToastSurface) -> MockToast {
    let (message, yes_label, no_label, ok_label, cancel_label) = match &surface.body {
        ToastBody::Plain { message, .. } => (message.clone(), None, None, None, None),
        ToastBody::Choice {
            message,
            yes_label,
            no_label,
            ..
        } => (
            message.clone(),
            Some(yes_label.clone()),
            Some(no_label.clone()),
            None,
            None,
        ),
        ToastBody::Prompt {
            buffer,
            ok_label,
            cancel_label,
            ..
        } => (
            buffer.lock().expect("prompt buffer").clone(),
            None,
            None,
            Some(ok_label.clone()),
            Some(cancel_label.clone()),
        ),
    };
    MockToast {
        id: surface.id,
        title: surface.title.clone(),
        message,
        placement: surface.placement,
        variant: surface.variant,
        auto_hide: surface.auto_hide,
        append: surface.append,
        yes_label,
        no_label,
        ok_label,
        cancel_label,
    }
}

/// A [`Navigator`] double recording every visited target.
#[derive(Default)]
pub struct MockNavigator {
    visited: Mutex<Vec<NavTarget>>,
    fail_with: Mutex<Option<String>>,
}

impl MockNavigator {
    /// A navigator that rejects every navigation with the given reason.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            visited: Mutex::new(Vec::new()),
            fail_with: Mutex::new(Some(reason.into())),
        }
    }

    pub fn visited(&self) -> Vec<NavTarget> {
        self.visited.lock().expect("navigator state").clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, target: &NavTarget) -> Result<()> {
        if let Some(reason) = self.fail_with.lock().expect("navigator state").clone() {
            return Err(Error::Navigation(reason));
        }
        self.visited
            .lock()
            .expect("navigator state")
            .push(target.clone());
        Ok(())
    }
}
