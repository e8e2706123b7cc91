// SPDX-License-Identifier: MPL-2.0
//! Text and image shown by a banner.

use std::path::{Path, PathBuf};

/// Reference to the image drawn on the leading side of a banner.
///
/// The core only carries the reference; loading is the renderer's
/// business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Content of a banner, fixed at construction.
///
/// Title and subtitle are typed as optional so that "no subtitle" is an
/// explicit choice rather than an empty string somebody forgot to fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerContent {
    title: Option<String>,
    subtitle: Option<String>,
    image: Option<ImageRef>,
}

impl BannerContent {
    /// Creates content with a title and a subtitle.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            subtitle: Some(subtitle.into()),
            image: None,
        }
    }

    /// Creates content with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Attaches an image shown next to the text.
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Returns whether there is nothing to display at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.subtitle.is_none() && self.image.is_none()
    }
}
