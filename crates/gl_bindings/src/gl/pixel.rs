//! Pixel formats and pixel storage parameters

use crate::gl::{GlError, GlResult};

/// How each channel of a pixel is stored and interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelComponent {
    /// Unsigned, normalized to `[0, 1]`
    Unorm,
    /// Signed, normalized to `[-1, 1]`
    Snorm,
    /// Unsigned integer
    Uint,
    /// Signed integer
    Sint,
    /// Floating point
    Float,
}

/// Format of pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PixelFormat {
    R8Unorm, Rg8Unorm, Rgb8Unorm, Rgba8Unorm,
    R8Snorm, Rg8Snorm, Rgb8Snorm, Rgba8Snorm,
    R8Uint, Rg8Uint, Rgb8Uint, Rgba8Uint,
    R8Sint, Rg8Sint, Rgb8Sint, Rgba8Sint,
    R16Unorm, Rg16Unorm, Rgb16Unorm, Rgba16Unorm,
    R16Snorm, Rg16Snorm, Rgb16Snorm, Rgba16Snorm,
    R16Uint, Rg16Uint, Rgb16Uint, Rgba16Uint,
    R16Sint, Rg16Sint, Rgb16Sint, Rgba16Sint,
    R32Uint, Rg32Uint, Rgb32Uint, Rgba32Uint,
    R32Sint, Rg32Sint, Rgb32Sint, Rgba32Sint,
    R16Float, Rg16Float, Rgb16Float, Rgba16Float,
    R32Float, Rg32Float, Rgb32Float, Rgba32Float,
}

impl PixelFormat {
    /// `(channel count, component kind, component size in bytes)`
    fn layout(self) -> (u32, PixelComponent, u32) {
        use PixelComponent::{Float, Sint, Snorm, Uint, Unorm};
        match self {
            Self::R8Unorm => (1, Unorm, 1),
            Self::Rg8Unorm => (2, Unorm, 1),
            Self::Rgb8Unorm => (3, Unorm, 1),
            Self::Rgba8Unorm => (4, Unorm, 1),
            Self::R8Snorm => (1, Snorm, 1),
            Self::Rg8Snorm => (2, Snorm, 1),
            Self::Rgb8Snorm => (3, Snorm, 1),
            Self::Rgba8Snorm => (4, Snorm, 1),
            Self::R8Uint => (1, Uint, 1),
            Self::Rg8Uint => (2, Uint, 1),
            Self::Rgb8Uint => (3, Uint, 1),
            Self::Rgba8Uint => (4, Uint, 1),
            Self::R8Sint => (1, Sint, 1),
            Self::Rg8Sint => (2, Sint, 1),
            Self::Rgb8Sint => (3, Sint, 1),
            Self::Rgba8Sint => (4, Sint, 1),
            Self::R16Unorm => (1, Unorm, 2),
            Self::Rg16Unorm => (2, Unorm, 2),
            Self::Rgb16Unorm => (3, Unorm, 2),
            Self::Rgba16Unorm => (4, Unorm, 2),
            Self::R16Snorm => (1, Snorm, 2),
            Self::Rg16Snorm => (2, Snorm, 2),
            Self::Rgb16Snorm => (3, Snorm, 2),
            Self::Rgba16Snorm => (4, Snorm, 2),
            Self::R16Uint => (1, Uint, 2),
            Self::Rg16Uint => (2, Uint, 2),
            Self::Rgb16Uint => (3, Uint, 2),
            Self::Rgba16Uint => (4, Uint, 2),
            Self::R16Sint => (1, Sint, 2),
            Self::Rg16Sint => (2, Sint, 2),
            Self::Rgb16Sint => (3, Sint, 2),
            Self::Rgba16Sint => (4, Sint, 2),
            Self::R32Uint => (1, Uint, 4),
            Self::Rg32Uint => (2, Uint, 4),
            Self::Rgb32Uint => (3, Uint, 4),
            Self::Rgba32Uint => (4, Uint, 4),
            Self::R32Sint => (1, Sint, 4),
            Self::Rg32Sint => (2, Sint, 4),
            Self::Rgb32Sint => (3, Sint, 4),
            Self::Rgba32Sint => (4, Sint, 4),
            Self::R16Float => (1, Float, 2),
            Self::Rg16Float => (2, Float, 2),
            Self::Rgb16Float => (3, Float, 2),
            Self::Rgba16Float => (4, Float, 2),
            Self::R32Float => (1, Float, 4),
            Self::Rg32Float => (2, Float, 4),
            Self::Rgb32Float => (3, Float, 4),
            Self::Rgba32Float => (4, Float, 4),
        }
    }

    /// Number of channels
    pub fn channel_count(self) -> u32 {
        self.layout().0
    }

    /// Component interpretation
    pub fn component(self) -> PixelComponent {
        self.layout().1
    }

    /// Size of one pixel in bytes
    pub fn pixel_size(self) -> u32 {
        let (channels, _, size) = self.layout();
        channels * size
    }
}

/// Pixel storage parameters (`GL_PACK_*` / `GL_UNPACK_*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelStorage {
    alignment: u32,
    row_length: u32,
    image_height: u32,
    skip: [u32; 3],
}

impl Default for PixelStorage {
    fn default() -> Self {
        Self {
            alignment: 4,
            row_length: 0,
            image_height: 0,
            skip: [0; 3],
        }
    }
}

/// Memory layout of an image described by a [`PixelStorage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataProperties {
    /// Offset of the first pixel in bytes
    pub offset: usize,
    /// Distance between rows in bytes
    pub row_stride: usize,
    /// Distance between images (slices) in bytes
    pub image_stride: usize,
    /// Minimal data size holding the whole image
    pub data_size: usize,
}

impl PixelStorage {
    /// Default storage: 4-byte row alignment, tightly packed rows and images
    pub fn new() -> Self {
        Self::default()
    }

    /// Row alignment
    pub fn alignment(&self) -> u32 {
        self.alignment
    }

    /// Set row alignment; GL accepts 1, 2, 4 or 8
    pub fn set_alignment(&mut self, alignment: u32) -> GlResult<&mut Self> {
        if !matches!(alignment, 1 | 2 | 4 | 8) {
            return Err(GlError::InvalidArgument(format!("row alignment must be 1, 2, 4 or 8, got {alignment}")));
        }
        self.alignment = alignment;
        Ok(self)
    }

    /// Row length in pixels, `0` means the image width
    pub fn row_length(&self) -> u32 {
        self.row_length
    }

    /// Set row length
    pub fn set_row_length(&mut self, row_length: u32) -> &mut Self {
        self.row_length = row_length;
        self
    }

    /// Image height in rows, `0` means the image height
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Set image height
    pub fn set_image_height(&mut self, image_height: u32) -> &mut Self {
        self.image_height = image_height;
        self
    }

    /// Pixel, row and image skip
    pub fn skip(&self) -> [u32; 3] {
        self.skip
    }

    /// Set pixel, row and image skip
    pub fn set_skip(&mut self, skip: [u32; 3]) -> &mut Self {
        self.skip = skip;
        self
    }

    /// Layout of a `size` image of `format` under these parameters
    pub fn data_properties(&self, format: PixelFormat, size: [u32; 3]) -> DataProperties {
        let pixel_size = format.pixel_size() as usize;
        let row_pixels = (if self.row_length == 0 { size[0] } else { self.row_length }) as usize;
        let rows = (if self.image_height == 0 { size[1] } else { self.image_height }) as usize;
        let alignment = self.alignment as usize;

        let row_stride = (row_pixels * pixel_size).div_ceil(alignment) * alignment;
        let image_stride = row_stride * rows;
        let offset = self.skip[0] as usize * pixel_size
            + self.skip[1] as usize * row_stride
            + self.skip[2] as usize * image_stride;

        DataProperties {
            offset,
            row_stride,
            image_stride,
            data_size: offset + image_stride * size[2] as usize,
        }
    }
}
