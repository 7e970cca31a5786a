//! Sprite drawing for page-packed framebuffers.
//!
//! Drawing a sprite happens in two steps: [`locate`] finds the bytes of the
//! requested animation frame inside the resource (and mask), then [`blit`]
//! clips the sprite against the screen and composites it page by page.
//!
//! The [`Sprites`] trait bundles both steps behind one call per draw mode and
//! is implemented for every [`PageBuffer`].
//!
//! # Examples
//!
//! ```
//! use pagesprite_types::prelude::*;
//!
//! let mut fb = Framebuffer::default();
//! let arrow = [8, 8, 0x18, 0x18, 0x18, 0x18, 0xFF, 0x7E, 0x3C, 0x18];
//!
//! fb.draw_overwrite(4, 10, &arrow, 0).unwrap();
//! assert!(fb.lit_pixels() > 0);
//! ```

mod blit;
mod locate;
mod mode;
pub mod resource;


pub use blit::{ClipPlan, blit};
pub use locate::{FrameLocation, locate};
pub use mode::DrawMode;
pub use resource::{Header, Resource};

use crate::{error::SpriteError, framebuffer::PageBuffer};

/// Sprite drawing operations on a page buffer.
///
/// `bitmap` arguments are complete resources (`[width][height][frames...]`);
/// `mask` arguments are header-less mask planes laid out like the frames.
/// An empty `bitmap` draws nothing and succeeds.
pub trait Sprites: PageBuffer {
	/// Draws `frame` of `bitmap` at (`x`, `y`) using `mode`.
	///
	/// `mask_frame` selects the frame of `mask` independently of `frame`.
	///
	/// # Errors
	///
	/// Returns an error if the resource header is malformed, the frame lies
	/// past the end of the resource or mask, or `mode` cannot be drawn.
	#[allow(clippy::too_many_arguments)]
	fn draw(
		&mut self,
		x: i16,
		y: i16,
		bitmap: &[u8],
		frame: u8,
		mask: Option<&[u8]>,
		mask_frame: u8,
		mode: DrawMode,
	) -> Result<(), SpriteError> {
		if bitmap.is_empty() {
			return Ok(());
		}

		let mode = mode.resolve(mask.is_some());
		if mode == DrawMode::InterleavedMaskPlusColor {
			log::warn!("draw mode {mode} is not implemented, nothing drawn");
			return Err(SpriteError::UnsupportedMode(mode));
		}

		let location = locate(bitmap, frame, mask, mask_frame, mode)?;
		let stride = location.frame_stride();

		let start = location.bitmap_offset;
		let frame_bytes = &bitmap[start..start + stride * mode.stride_factor()];
		let mask_bytes = match (mask, location.mask_offset) {
			(Some(mask), Some(offset)) => Some(&mask[offset..offset + stride]),
			_ => None,
		};

		blit(self, x, y, location.width, location.height, frame_bytes, mask_bytes, mode)
	}

	/// Draws with every sprite pixel opaque, replacing the destination.
	fn draw_overwrite(&mut self, x: i16, y: i16, bitmap: &[u8], frame: u8) -> Result<(), SpriteError> {
		self.draw(x, y, bitmap, frame, None, 0, DrawMode::Unmasked)
	}

	/// Draws only the set pixels of the sprite.
	fn draw_self_masked(
		&mut self,
		x: i16,
		y: i16,
		bitmap: &[u8],
		frame: u8,
	) -> Result<(), SpriteError> {
		self.draw(x, y, bitmap, frame, None, 0, DrawMode::SelfMask)
	}

	/// Clears the destination wherever the sprite has a set pixel.
	fn draw_erase(&mut self, x: i16, y: i16, bitmap: &[u8], frame: u8) -> Result<(), SpriteError> {
		self.draw(x, y, bitmap, frame, None, 0, DrawMode::SelfMaskErase)
	}

	/// Draws using a separate mask plane.
	fn draw_external_mask(
		&mut self,
		x: i16,
		y: i16,
		bitmap: &[u8],
		mask: &[u8],
		frame: u8,
		mask_frame: u8,
	) -> Result<(), SpriteError> {
		self.draw(x, y, bitmap, frame, Some(mask), mask_frame, DrawMode::ExternalMask)
	}

	/// Draws a resource with interleaved mask and color planes.
	///
	/// # Errors
	///
	/// Always returns [`SpriteError::UnsupportedMode`] for a non-empty
	/// resource: the interleaved layout has no implementation yet.
	fn draw_plus_mask(&mut self, x: i16, y: i16, bitmap: &[u8], frame: u8) -> Result<(), SpriteError> {
		self.draw(x, y, bitmap, frame, None, 0, DrawMode::InterleavedMaskPlusColor)
	}

	/// Draws pre-located frame bytes; see [`blit`].
	#[allow(clippy::too_many_arguments)]
	fn draw_bitmap(
		&mut self,
		x: i16,
		y: i16,
		bitmap: &[u8],
		mask: Option<&[u8]>,
		width: u8,
		height: u8,
		mode: DrawMode,
	) -> Result<(), SpriteError> {
		blit(self, x, y, width, height, bitmap, mask, mode)
	}
}

impl<B: PageBuffer + ?Sized> Sprites for B {}
