// SPDX-License-Identifier: MPL-2.0
//! Domain types shared by the gallery and the viewer.
//!
//! Nothing here depends on iced; the types only describe which images exist
//! and how positions in the set move.

pub mod image_set;

pub use image_set::{ImageId, ImageSet};
