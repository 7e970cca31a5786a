//! Error types for sprite resources and page blitting.

use thiserror::Error;

use crate::sprite::DrawMode;

/// Errors that can occur when locating or drawing a sprite.
///
/// Conditions that merely leave the framebuffer untouched (an empty resource,
/// a sprite that is fully off-screen) are not errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteError {
	/// Resource too short to hold the width/height header
	#[error("Invalid resource: expected at least 2 header bytes, got {len} bytes")]
	InvalidResource {
		/// Actual length of the resource
		len: usize,
	},

	/// Header declares an empty sprite
	#[error("Invalid sprite dimensions: {width}x{height}")]
	ZeroDimension {
		/// Declared width
		width: u8,
		/// Declared height
		height: u8,
	},

	/// The requested frame does not fit inside the supplied bytes
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Number of bytes required to read the frame
		expected: usize,
		/// Number of bytes available
		actual: usize,
	},

	/// Draw mode is declared but has no implementation
	#[error("Unsupported draw mode: {0}")]
	UnsupportedMode(DrawMode),

	/// An externally masked draw was requested without a mask plane
	#[error("External mask draw requested without a mask")]
	MissingMask,

	/// Borrowed page buffer length does not match its dimensions
	#[error("Buffer size mismatch: expected {expected} bytes, got {actual} bytes")]
	BufferSize {
		/// Bytes required by the declared dimensions
		expected: usize,
		/// Bytes actually supplied
		actual: usize,
	},
}
