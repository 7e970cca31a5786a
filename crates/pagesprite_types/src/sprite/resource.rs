//! Sprite resource layout.
//!
//! A resource is `[width:u8][height:u8]` followed by one or more frames of
//! `width * ceil(height / 8)` bytes each. Frame data uses the same page layout
//! as the framebuffer: page rows top to bottom, one byte per column within a
//! row, bit 0 topmost. The frame count is not stored.

use std::fmt;

use crate::{error::SpriteError, framebuffer::PAGE_HEIGHT};

/// Resource format constants.
pub mod constants {
	/// Size of the width/height header in bytes
	pub const HEADER_SIZE: usize = 2;
}

/// Width/height header of a sprite resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	/// Sprite width in pixels
	pub width: u8,

	/// Sprite height in pixels
	pub height: u8,
}

impl Header {
	/// Parses the header at the start of `resource`.
	///
	/// # Errors
	///
	/// Returns [`SpriteError::InvalidResource`] if fewer than two bytes are
	/// available, and [`SpriteError::ZeroDimension`] if either dimension is 0.
	pub fn from_bytes(resource: &[u8]) -> Result<Self, SpriteError> {
		let [width, height, ..] = *resource else {
			return Err(SpriteError::InvalidResource {
				len: resource.len(),
			});
		};

		if width == 0 || height == 0 {
			return Err(SpriteError::ZeroDimension {
				width,
				height,
			});
		}

		Ok(Self {
			width,
			height,
		})
	}

	/// Returns the number of page rows one frame spans.
	#[inline]
	pub fn page_rows(&self) -> usize {
		(self.height as usize).div_ceil(PAGE_HEIGHT)
	}

	/// Returns the number of bytes in one frame plane.
	#[inline]
	pub fn frame_stride(&self) -> usize {
		self.width as usize * self.page_rows()
	}

	/// Serializes the header.
	pub fn to_bytes(&self) -> [u8; constants::HEADER_SIZE] {
		[self.width, self.height]
	}
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{}", self.width, self.height)
	}
}

/// Borrowed view of a sprite resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resource<'a> {
	header: Header,
	bytes: &'a [u8],
}

impl<'a> Resource<'a> {
	/// Wraps raw resource bytes, header included.
	pub fn new(bytes: &'a [u8]) -> Result<Self, SpriteError> {
		Ok(Self {
			header: Header::from_bytes(bytes)?,
			bytes,
		})
	}

	/// Returns the parsed header.
	pub fn header(&self) -> Header {
		self.header
	}

	/// Returns the sprite width.
	#[inline]
	pub fn width(&self) -> u8 {
		self.header.width
	}

	/// Returns the sprite height.
	#[inline]
	pub fn height(&self) -> u8 {
		self.header.height
	}

	/// Returns the full resource bytes, header included.
	pub fn as_bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// Returns the frame data following the header.
	pub fn data(&self) -> &'a [u8] {
		&self.bytes[constants::HEADER_SIZE..]
	}

	/// Returns the number of complete frames the resource holds, with frames
	/// `stride_factor` planes wide.
	pub fn frame_count(&self, stride_factor: usize) -> usize {
		self.data().len() / (self.header.frame_stride() * stride_factor)
	}

	/// Returns the plane of frame `index`, or `None` if it is not fully present.
	pub fn frame(&self, index: usize) -> Option<&'a [u8]> {
		let stride = self.header.frame_stride();
		let start = index.checked_mul(stride)?;
		self.data().get(start..start.checked_add(stride)?)
	}
}

/// Builds a resource from a header and the concatenated frame data.
pub fn build(width: u8, height: u8, frames: &[&[u8]]) -> Vec<u8> {
	let header = Header {
		width,
		height,
	};
	let mut bytes = Vec::with_capacity(
		constants::HEADER_SIZE + frames.iter().map(|f| f.len()).sum::<usize>(),
	);
	bytes.extend_from_slice(&header.to_bytes());
	for frame in frames {
		bytes.extend_from_slice(frame);
	}
	bytes
}
