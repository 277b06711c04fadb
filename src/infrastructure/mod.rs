// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters for non-GUI environments.

pub mod native_dialogs;
