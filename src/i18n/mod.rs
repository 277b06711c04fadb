// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for dialog and toast text.
//!
//! This module provides localization using the Fluent localization system.
//! It handles language detection, translation file loading, and lookup of
//! the label and backend error-code strings the notifier displays.
//!
//! # Features
//!
//! - Automatic locale detection from an explicit preference, the config
//!   file, or system settings
//! - Embedded `.ftl` translation resources
//! - Runtime language switching
//! - Identity passthrough for codes with no translation entry

pub mod fluent;

pub use fluent::I18n;
