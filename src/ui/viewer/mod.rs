// SPDX-License-Identifier: MPL-2.0
//! Full-screen image viewer: zoom, pan and navigation over the menu images.

pub mod component;
pub mod controls;
pub mod image_canvas;
pub mod subcomponents;

pub use component::{route_event, Effect, Message, Outcome, Settings, State, ViewEnv};
