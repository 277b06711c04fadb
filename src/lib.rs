// SPDX-License-Identifier: MPL-2.0
//! `herald` is a dialog and toast notification helper for GUI applications.
//!
//! It wraps blocking acknowledgment/confirmation dialogs and transient
//! toast surfaces (plain, two-affordance, and text-prompt toasts) behind a
//! small API, together with translation lookup and navigation delegation.
//! Presentation is pluggable: the core talks to a
//! [`DialogHost`](application::port::dialog::DialogHost) capability trait,
//! and a ready-made Iced adapter ships in [`ui::iced_host`].

#![doc(html_root_url = "https://docs.rs/herald/0.2.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod notifier;
pub mod test_utils;
pub mod ui;

pub use application::port::dialog::DialogHost;
pub use application::port::navigation::{Location, NavTarget, Navigator};
pub use domain::notification::{Placement, ToastId, Variant};
pub use notifier::request::{ConfirmToastRequest, PromptToastRequest, ToastRequest};
pub use notifier::{Notifier, NotifierBuilder};
