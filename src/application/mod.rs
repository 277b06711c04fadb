// SPDX-License-Identifier: MPL-2.0
//! Application layer - abstract interfaces the helper core depends on.

pub mod port;
