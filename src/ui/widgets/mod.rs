// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod scroll_gate;

pub use scroll_gate::{scroll_gate, ScrollGate};
