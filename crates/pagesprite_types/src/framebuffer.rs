//! Page-packed monochrome framebuffers.
//!
//! A framebuffer is a sequence of horizontal pages, each 8 pixel rows tall.
//! Within a page, the byte at `page * width + x` holds the 8 stacked pixels of
//! column `x`, bit 0 being the topmost.
//!
//! The blitter only needs byte access and the screen dimensions, which is what
//! [`PageBuffer`] exposes. [`Framebuffer`] owns its storage, while
//! [`PageSlice`] borrows a buffer that lives somewhere else (for example the
//! memory a display driver flushes from).

use crate::error::SpriteError;

/// Default screen width in pixels
pub const DEFAULT_WIDTH: usize = 128;

/// Default screen height in pixels
pub const DEFAULT_HEIGHT: usize = 64;

/// Number of pixel rows stored in one page byte
pub const PAGE_HEIGHT: usize = 8;

/// Returns the number of bytes a page-packed buffer of the given size needs.
#[inline]
pub const fn buffer_len(width: usize, height: usize) -> usize {
	width * height.div_ceil(PAGE_HEIGHT)
}

/// A writable, page-packed pixel buffer with fixed dimensions.
pub trait PageBuffer {
	/// Screen width in pixels.
	fn width(&self) -> usize;

	/// Screen height in pixels.
	fn height(&self) -> usize;

	/// Raw page bytes, `width * page_count` long.
	fn pages(&self) -> &[u8];

	/// Mutable raw page bytes, `width * page_count` long.
	fn pages_mut(&mut self) -> &mut [u8];

	/// Number of 8-row pages, rounding a partial bottom page up.
	#[inline]
	fn page_count(&self) -> usize {
		self.height().div_ceil(PAGE_HEIGHT)
	}
}

/// Screen dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ScreenSize {
	/// Width in pixels
	pub width: usize,

	/// Height in pixels
	pub height: usize,
}

impl Default for ScreenSize {
	fn default() -> Self {
		Self {
			width: DEFAULT_WIDTH,
			height: DEFAULT_HEIGHT,
		}
	}
}

/// Owned page-packed framebuffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Framebuffer {
	width: usize,
	height: usize,
	data: Vec<u8>,
}

impl Framebuffer {
	/// Creates a cleared framebuffer.
	///
	/// # Panics
	///
	/// Panics if either dimension exceeds `i16::MAX`, since sprite coordinates
	/// are signed 16-bit values.
	pub fn new(width: usize, height: usize) -> Self {
		assert!(
			width <= i16::MAX as usize && height <= i16::MAX as usize,
			"screen dimensions must fit in i16"
		);
		Self {
			width,
			height,
			data: vec![0; buffer_len(width, height)],
		}
	}

	/// Creates a cleared framebuffer from a [`ScreenSize`].
	pub fn with_size(size: ScreenSize) -> Self {
		Self::new(size.width, size.height)
	}

	/// Returns the screen dimensions.
	pub fn size(&self) -> ScreenSize {
		ScreenSize {
			width: self.width,
			height: self.height,
		}
	}

	/// Sets every pixel to off.
	pub fn clear(&mut self) {
		self.data.fill(0);
	}

	/// Fills every page byte with `value`.
	pub fn fill(&mut self, value: u8) {
		self.data.fill(value);
	}

	/// Returns the raw page bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	/// Returns the bytes of a single page, or `None` past the last page.
	pub fn page_row(&self, page: usize) -> Option<&[u8]> {
		let start = page.checked_mul(self.width)?;
		self.data.get(start..start + self.width)
	}

	/// Gets the pixel at (x, y). Out-of-bounds coordinates read as off.
	pub fn get_pixel(&self, x: usize, y: usize) -> bool {
		if x >= self.width || y >= self.height {
			return false;
		}
		let index = (y / PAGE_HEIGHT) * self.width + x;
		(self.data[index] >> (y % PAGE_HEIGHT)) & 1 != 0
	}

	/// Sets the pixel at (x, y). Out-of-bounds coordinates are ignored.
	pub fn put_pixel(&mut self, x: usize, y: usize, value: bool) {
		if x >= self.width || y >= self.height {
			return;
		}
		let index = (y / PAGE_HEIGHT) * self.width + x;
		let bit = 1 << (y % PAGE_HEIGHT);
		if value {
			self.data[index] |= bit;
		} else {
			self.data[index] &= !bit;
		}
	}

	/// Counts the pixels that are on.
	pub fn lit_pixels(&self) -> usize {
		self.data.iter().map(|b| b.count_ones() as usize).sum()
	}
}

impl Default for Framebuffer {
	fn default() -> Self {
		Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
	}
}

impl PageBuffer for Framebuffer {
	#[inline]
	fn width(&self) -> usize {
		self.width
	}

	#[inline]
	fn height(&self) -> usize {
		self.height
	}

	#[inline]
	fn pages(&self) -> &[u8] {
		&self.data
	}

	#[inline]
	fn pages_mut(&mut self) -> &mut [u8] {
		&mut self.data
	}
}

impl From<Framebuffer> for Vec<u8> {
	fn from(fb: Framebuffer) -> Self {
		fb.data
	}
}

/// Page-packed view over a caller-owned byte buffer.
#[derive(Debug)]
pub struct PageSlice<'a> {
	width: usize,
	height: usize,
	data: &'a mut [u8],
}

impl<'a> PageSlice<'a> {
	/// Wraps `data` as a `width` x `height` page buffer.
	///
	/// # Errors
	///
	/// Returns [`SpriteError::BufferSize`] if `data` is not exactly
	/// `width * ceil(height / 8)` bytes long, or if a dimension exceeds
	/// `i16::MAX`.
	pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Result<Self, SpriteError> {
		let expected = buffer_len(width, height);
		if data.len() != expected || width > i16::MAX as usize || height > i16::MAX as usize {
			return Err(SpriteError::BufferSize {
				expected,
				actual: data.len(),
			});
		}
		Ok(Self {
			width,
			height,
			data,
		})
	}
}

impl PageBuffer for PageSlice<'_> {
	#[inline]
	fn width(&self) -> usize {
		self.width
	}

	#[inline]
	fn height(&self) -> usize {
		self.height
	}

	#[inline]
	fn pages(&self) -> &[u8] {
		&*self.data
	}

	#[inline]
	fn pages_mut(&mut self) -> &mut [u8] {
		&mut *self.data
	}
}
