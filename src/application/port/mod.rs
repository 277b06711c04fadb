// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that presentation and routing
//! adapters implement. These traits use only domain types, ensuring the
//! helper core remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`dialog`]: modal dialog and toast presentation
//! - [`navigation`]: page navigation
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles in signatures)
//! - Traits are `Send + Sync` so a notifier can be shared across tasks
//! - Modal completion is signalled through oneshot responders; dropping a
//!   responder unresolved means the dialog was dismissed without a choice

pub mod dialog;
pub mod navigation;

// Re-export main types for convenience
pub use dialog::{AckResponder, ChoiceResponder, DialogHost};
pub use navigation::{Location, NavTarget, Navigator};
