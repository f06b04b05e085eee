// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator, owns the GestureSession)
//!     ├── zoom      - Button, wheel and pinch zoom
//!     ├── drag      - Mouse drag-to-pan
//!     ├── touch     - Pinch, touch pan and swipe
//!     └── keyboard  - Escape / arrow keys, modifier tracking
//! ```

pub mod drag;
pub mod keyboard;
pub mod touch;
pub mod zoom;
