// SPDX-License-Identifier: MPL-2.0
//! The notification helper core.
//!
//! [`Notifier`] is an explicitly constructed context object: the embedding
//! application builds one at its composition root with a
//! [`DialogHost`](crate::application::port::dialog::DialogHost) adapter
//! (and optionally a [`Navigator`](crate::application::port::navigation::Navigator))
//! and threads it through call sites. All dialog, toast, translation and
//! navigation requests route through it.
//!
//! The core owns two pieces of state:
//!
//! - a monotonic sequence for toast identifiers, and
//! - the de-duplication guard for acknowledgment dialogs: while an alert
//!   with body `S` is open, further alerts with the same body are
//!   suppressed instead of stacking. Alerts with *different* bodies are
//!   not affected by the guard and may coexist.
//!
//! `alert` and `confirm` suspend the caller until the host reports a user
//! decision; the toast operations register callbacks and return
//! immediately.

pub mod request;

use crate::application::port::dialog::DialogHost;
use crate::application::port::navigation::{NavTarget, Navigator};
use crate::config::{
    self, Config, DEFAULT_CONFIRM_TOAST_HIDE_DELAY_MS, DEFAULT_TOAST_HIDE_DELAY_MS,
};
use crate::domain::notification::{
    AlertRequest, ConfirmRequest, Placement, ToastBody, ToastId, ToastSurface, Variant,
};
use crate::i18n::I18n;
use crate::infrastructure::native_dialogs;
use request::{ConfirmToastRequest, PromptToastRequest, ToastRequest};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::sync::oneshot;
use unic_langid::LanguageIdentifier;

/// Builder for [`Notifier`]. The dialog host is mandatory; everything else
/// has a sensible default.
pub struct NotifierBuilder {
    host: Arc<dyn DialogHost>,
    navigator: Option<Arc<dyn Navigator>>,
    config: Option<Config>,
    language: Option<String>,
}

impl NotifierBuilder {
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Uses the given configuration instead of loading `settings.toml`.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Explicit language preference, overriding config and OS locale.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Notifier {
        let config = self
            .config
            .unwrap_or_else(|| config::load().unwrap_or_default());
        let i18n = I18n::new(self.language, &config);
        Notifier {
            host: self.host,
            navigator: self.navigator,
            i18n: RwLock::new(i18n),
            toast_seq: AtomicU64::new(0),
            last_alert: Mutex::new(String::new()),
            toast_hide_delay: Duration::from_millis(
                config.toast_hide_delay_ms.unwrap_or(DEFAULT_TOAST_HIDE_DELAY_MS),
            ),
            confirm_toast_hide_delay: Duration::from_millis(
                config
                    .confirm_toast_hide_delay_ms
                    .unwrap_or(DEFAULT_CONFIRM_TOAST_HIDE_DELAY_MS),
            ),
            default_placement: config.placement.unwrap_or_default(),
        }
    }
}

/// Notification and dialog helper. See the [module docs](self).
pub struct Notifier {
    host: Arc<dyn DialogHost>,
    navigator: Option<Arc<dyn Navigator>>,
    i18n: RwLock<I18n>,
    toast_seq: AtomicU64,
    /// Body of the most recently opened, still-open alert. Empty when no
    /// alert is open.
    last_alert: Mutex<String>,
    toast_hide_delay: Duration,
    confirm_toast_hide_delay: Duration,
    default_placement: Placement,
}

impl Notifier {
    #[must_use]
    pub fn builder(host: Arc<dyn DialogHost>) -> NotifierBuilder {
        NotifierBuilder {
            host,
            navigator: None,
            config: None,
            language: None,
        }
    }

    /// Displays a blocking acknowledgment dialog and resolves once it is
    /// dismissed.
    ///
    /// A second alert with a body identical to the one currently showing
    /// is suppressed and resolves immediately; repeated, possibly racing,
    /// call sites therefore cannot stack identical dialogs. The guard is
    /// per-content: alerts with differing bodies open independently.
    pub async fn alert(&self, title: impl Into<String>, content: impl Into<String>) {
        let title = title.into();
        let content = content.into();
        {
            let mut last = self.last_alert.lock().expect("alert guard lock");
            if !content.is_empty() && *last == content {
                return;
            }
            last.clone_from(&content);
        }

        if self.host.supports_modals() {
            let (done, dismissed) = oneshot::channel();
            self.host.show_acknowledgment(
                AlertRequest {
                    title,
                    content,
                    variant: Variant::Success,
                },
                done,
            );
            // A dropped responder counts as dismissal too.
            let _ = dismissed.await;
        } else {
            native_dialogs::blocking_alert(&title, &content);
        }

        self.last_alert.lock().expect("alert guard lock").clear();
    }

    /// Displays a blocking yes/no dialog.
    ///
    /// Resolves to `Some(true)` on an affirmative action, `Some(false)` on
    /// an explicit decline, and `None` when the dialog is closed without a
    /// choice.
    pub async fn confirm(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<bool> {
        let title = title.into();
        let content = content.into();
        if self.host.supports_modals() {
            let (reply, choice) = oneshot::channel();
            self.host.show_confirmation(
                ConfirmRequest {
                    title,
                    content,
                    yes_label: self.tr("yes"),
                    no_label: self.tr("no"),
                },
                reply,
            );
            choice.await.unwrap_or(None)
        } else {
            native_dialogs::blocking_confirm(&title, &content)
        }
    }

    /// Displays an error alert box for a backend error code.
    ///
    /// Codes carrying the `error_` prefix are translated; anything else is
    /// shown verbatim behind an "Unknown error" label. Never fails, always
    /// resolves once the dialog closes.
    pub async fn error(&self, code: impl AsRef<str>) {
        let code = code.as_ref();
        if code.starts_with("error_") {
            self.alert(self.tr("error"), self.tr(code)).await;
        } else {
            self.alert(self.tr("error"), format!("Unknown error: {code}"))
                .await;
        }
    }

    /// Opens a toast. Fire-and-forget: callbacks run later, when the host
    /// dispatches the corresponding UI event.
    ///
    /// Returns the identifier assigned to the surface, usable with
    /// [`dismiss_toast`](Self::dismiss_toast).
    pub fn toast(&self, request: ToastRequest) -> ToastId {
        let id = self.next_toast_id();
        let auto_hide = if request.persistent {
            None
        } else {
            Some(request.hide_delay.unwrap_or(self.toast_hide_delay))
        };
        self.host.show_toast(ToastSurface {
            id,
            title: request.title,
            body: ToastBody::Plain {
                message: request.message,
                on_click: request.on_click,
                on_close: request.on_close,
            },
            placement: request.placement.unwrap_or(self.default_placement),
            variant: request.variant.unwrap_or_default(),
            auto_hide,
            append: request.append,
        });
        id
    }

    /// Opens a toast with two explicit action controls.
    ///
    /// Exactly one of the callbacks fires, when its control is used; if
    /// the toast auto-hides first, neither does.
    pub fn confirm_toast(&self, request: ConfirmToastRequest) -> ToastId {
        let id = self.next_toast_id();
        self.host.show_toast(ToastSurface {
            id,
            title: request.title,
            body: ToastBody::Choice {
                message: request.message,
                yes_label: self.tr("open"),
                no_label: self.tr("close"),
                on_yes: request.on_yes,
                on_no: request.on_no,
            },
            placement: request.placement.unwrap_or(self.default_placement),
            variant: request.variant.unwrap_or_default(),
            auto_hide: Some(request.hide_delay.unwrap_or(self.confirm_toast_hide_delay)),
            append: request.append,
        });
        id
    }

    /// Opens a toast with an editable text field pre-filled with the
    /// request message.
    ///
    /// Every input event overwrites the shared buffer, so the Ok callback
    /// receives the text as last edited. The toast never auto-hides.
    pub fn prompt_toast(&self, request: PromptToastRequest) -> ToastId {
        let id = self.next_toast_id();
        self.host.show_toast(ToastSurface {
            id,
            title: request.title,
            body: ToastBody::Prompt {
                buffer: Arc::new(Mutex::new(request.message)),
                ok_label: self.tr("ok"),
                cancel_label: self.tr("cancel"),
                on_ok: request.on_ok,
                on_cancel: request.on_cancel,
            },
            placement: request.placement.unwrap_or(self.default_placement),
            variant: request.variant.unwrap_or_default(),
            auto_hide: None,
            append: request.append,
        });
        id
    }

    /// Retires a toast by identifier without firing its callbacks.
    pub fn dismiss_toast(&self, id: ToastId) {
        self.host.dismiss_toast(id);
    }

    /// Navigates via the attached [`Navigator`].
    ///
    /// Without one, the request is surfaced as a visible warning instead
    /// of being dropped silently.
    pub fn open(&self, target: impl Into<NavTarget>) {
        let target = target.into();
        match &self.navigator {
            Some(navigator) => {
                if let Err(err) = navigator.navigate(&target) {
                    log::warn!("navigation to {target} failed: {err}");
                }
            }
            None => {
                log::warn!("navigation to {target} requested, but no navigator is attached");
                self.toast(
                    ToastRequest::new(self.tr("warning"), format!("No route to {target}"))
                        .variant(Variant::Warning),
                );
            }
        }
    }

    /// Resolves a code to its display string; unknown codes pass through
    /// unchanged.
    pub fn tr(&self, code: &str) -> String {
        self.i18n.read().expect("i18n lock").tr(code)
    }

    /// Former name of [`tr`](Self::tr), retained for older call sites.
    #[deprecated(note = "use `tr` instead")]
    pub fn translate(&self, code: &str) -> String {
        self.tr(code)
    }

    /// Switches the display language at runtime. Unavailable locales are
    /// ignored.
    pub fn set_locale(&self, locale: LanguageIdentifier) {
        self.i18n.write().expect("i18n lock").set_locale(locale);
    }

    fn next_toast_id(&self) -> ToastId {
        ToastId::new(self.toast_seq.fetch_add(1, Ordering::Relaxed))
    }
}
