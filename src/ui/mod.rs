// SPDX-License-Identifier: MPL-2.0
//! Built-in presentation layer for Iced applications.
//!
//! [`iced_host`] provides a ready-made
//! [`DialogHost`](crate::application::port::dialog::DialogHost) adapter; an
//! application embeds it by forwarding its messages and layering its view
//! over the main content. [`design_tokens`] holds the visual constants the
//! adapter's widgets draw from.

pub mod design_tokens;
pub mod iced_host;
