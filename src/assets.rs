// SPDX-License-Identifier: MPL-2.0
//! Resolution of image identifiers to files on disk.
//!
//! The viewer never reads these files itself. It is handed an image handle
//! plus the natural size probed here (headers only, no pixel decoding).

use crate::config::GalleryConfig;
use crate::domain::{ImageId, ImageSet};
use crate::error::Result;
use iced::widget::image::Handle;
use iced::Size;
use std::path::{Path, PathBuf};

/// Maps an [`ImageId`] to `<root>/img/<id>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    root: PathBuf,
    extension: String,
}

impl AssetResolver {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.assets_dir.clone(), config.image_extension.clone())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path of the given image.
    #[must_use]
    pub fn path_for(&self, id: &ImageId) -> PathBuf {
        let mut path = self.root.join("img");
        path.push(format!("{}.{}", id.as_str(), self.extension));
        path
    }

    /// Image handle for rendering; decoding happens lazily inside iced.
    #[must_use]
    pub fn handle_for(&self, id: &ImageId) -> Handle {
        Handle::from_path(self.path_for(id))
    }

    /// Natural pixel size of the image, read from the file header.
    pub fn dimensions_of(&self, id: &ImageId) -> Result<Size<u32>> {
        let (width, height) = image_rs::image_dimensions(self.path_for(id))?;
        Ok(Size::new(width, height))
    }

    /// Probes every image of the set. Unreadable images yield `None` and are
    /// displayed in the default 4:3 frame.
    #[must_use]
    pub fn probe_all(&self, images: &ImageSet) -> Vec<Option<Size<u32>>> {
        images
            .iter()
            .map(|id| match self.dimensions_of(id) {
                Ok(size) => Some(size),
                Err(err) => {
                    log::warn!("Cannot read size of image {}: {}", id, err);
                    None
                }
            })
            .collect()
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_into_img_folder_with_extension() {
        let resolver = AssetResolver::new("/srv/site", "jpeg");
        assert_eq!(
            resolver.path_for(&ImageId::from("03")),
            PathBuf::from("/srv/site/img/03.jpeg")
        );
    }

    #[test]
    fn default_resolver_uses_assets_dir() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.root(), Path::new("assets"));
        assert!(resolver
            .path_for(&ImageId::from("01"))
            .ends_with("img/01.jpeg"));
    }

    #[test]
    fn probes_dimensions_from_header() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir_all(dir.path().join("img")).expect("img dir");
        image_rs::RgbImage::new(8, 6)
            .save(dir.path().join("img").join("01.png"))
            .expect("write png");

        let resolver = AssetResolver::new(dir.path(), "png");
        let images: ImageSet = ["01", "02"].into_iter().collect();
        assert_eq!(
            resolver.dimensions_of(&ImageId::from("01")).ok(),
            Some(Size::new(8, 6))
        );
        assert_eq!(resolver.probe_all(&images), vec![Some(Size::new(8, 6)), None]);
    }
}
