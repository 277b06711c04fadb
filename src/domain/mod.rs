// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects describing notifications and dialogs.
//!
//! These types carry no rendering logic. They describe what should be
//! presented and how its affordances resolve, independently of any
//! concrete UI toolkit.

pub mod notification;
