//! Rendered icon types.
//!
//! An [`IconImage`] is one square canvas; an [`IconSet`] groups the canvases
//! rendered for several edge lengths.

use image::RgbImage;

/// A single rendered square icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGB format.
    pub data: RgbImage,
}

impl IconImage {
    /// Wraps rendered image data.
    pub fn new(data: RgbImage) -> Self {
        Self { data }
    }

    /// Returns the edge length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.data.width() == self.data.height()
    }

    /// Returns true if any pixel has exactly the given RGB value.
    pub fn contains_color(&self, rgb: [u8; 3]) -> bool {
        self.data.pixels().any(|p| p.0 == rgb)
    }
}

/// A collection of icons of the same emblem at different sizes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The rendered icons, in the order they were added.
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Adds an image to the icon set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Finds the image with exactly the given edge length.
    pub fn get(&self, size: u32) -> Option<&IconImage> {
        self.images.iter().find(|img| img.size() == size)
    }

    /// Returns the edge lengths present, in insertion order.
    pub fn sizes(&self) -> Vec<u32> {
        self.images.iter().map(IconImage::size).collect()
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

impl IntoIterator for IconSet {
    type Item = IconImage;
    type IntoIter = std::vec::IntoIter<IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
