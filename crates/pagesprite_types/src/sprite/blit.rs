//! Page blitter.
//!
//! Sprite bytes are column slices of 8 pixels, just like framebuffer bytes.
//! When a sprite's `y` is not a multiple of 8, each source byte straddles two
//! destination pages: it is widened to 16 bits and shifted down by `y & 7`, the
//! low byte landing in the upper page and the high byte in the page below.

use super::mode::DrawMode;
use crate::{
	error::SpriteError,
	framebuffer::{PAGE_HEIGHT, PageBuffer},
};

/// Portion of a sprite that survives clipping against the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipPlan {
	/// Source columns skipped on the left
	pub x_offset: usize,

	/// Columns actually written
	pub rendered_width: usize,

	/// First destination column
	pub dest_x: usize,

	/// Sub-page bit offset, `y & 7`
	pub y_offset: u32,

	/// Destination page of the first processed source row; `-1` when that row
	/// only reaches the screen through its lower half
	pub start_page: i32,

	/// Source page rows skipped at the top
	pub skip_rows: usize,

	/// Source page rows processed
	pub rows: usize,
}

impl ClipPlan {
	/// Clips a `width` x `height` sprite drawn at (`x`, `y`) against a
	/// `screen_width` x `screen_height` page buffer.
	///
	/// Returns `None` when nothing of the sprite is visible.
	pub fn new(
		screen_width: usize,
		screen_height: usize,
		x: i16,
		y: i16,
		width: u8,
		height: u8,
	) -> Option<Self> {
		let screen_width = screen_width as i32;
		let screen_height = screen_height as i32;
		let (x, y) = (i32::from(x), i32::from(y));
		let (w, h) = (i32::from(width), i32::from(height));

		if x + w <= 0 || x >= screen_width || y + h <= 0 || y >= screen_height {
			return None;
		}

		let x_offset = if x < 0 {
			-x
		} else {
			0
		};
		let rendered_width = (w - x_offset).min(screen_width - x - x_offset);

		let page_height = PAGE_HEIGHT as i32;
		let y_offset = y.rem_euclid(page_height);
		let mut start_page = y.div_euclid(page_height);

		// rows above page -1 only ever touch off-screen pages
		let skip_rows = if start_page < -1 {
			-start_page - 1
		} else {
			0
		};

		let screen_pages = (screen_height + page_height - 1) / page_height;
		let mut rows = (h + page_height - 1) / page_height;
		if start_page + rows > screen_pages {
			rows = screen_pages - start_page;
		}
		rows -= skip_rows;
		start_page += skip_rows;

		if rows <= 0 || rendered_width <= 0 {
			return None;
		}

		Some(Self {
			x_offset: x_offset as usize,
			rendered_width: rendered_width as usize,
			dest_x: (x + x_offset) as usize,
			y_offset: y_offset as u32,
			start_page,
			skip_rows: skip_rows as usize,
			rows: rows as usize,
		})
	}
}

/// Draws pre-located sprite bytes onto `fb`.
///
/// `bitmap` holds one frame plane (`width * ceil(height / 8)` bytes) starting
/// at the frame to draw; `mask`, if any, holds the matching mask plane.
/// [`DrawMode::AutoDetect`] resolves against the presence of `mask`.
///
/// An empty `bitmap` or a sprite entirely off-screen leaves `fb` untouched and
/// returns `Ok(())`.
///
/// # Errors
///
/// - [`SpriteError::UnsupportedMode`] for [`DrawMode::InterleavedMaskPlusColor`]
/// - [`SpriteError::MissingMask`] for [`DrawMode::ExternalMask`] without a mask
/// - [`SpriteError::InsufficientData`] if `bitmap` or `mask` is shorter than one
///   frame plane
#[allow(clippy::too_many_arguments)]
pub fn blit<B: PageBuffer + ?Sized>(
	fb: &mut B,
	x: i16,
	y: i16,
	width: u8,
	height: u8,
	bitmap: &[u8],
	mask: Option<&[u8]>,
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

	let stride = width as usize * (height as usize).div_ceil(PAGE_HEIGHT);
	check_plane(stride, bitmap)?;
	let mask: &[u8] = match (mode, mask) {
		(DrawMode::ExternalMask, None) => return Err(SpriteError::MissingMask),
		(DrawMode::ExternalMask, Some(mask)) => {
			check_plane(stride, mask)?;
			mask
		}
		_ => &[],
	};

	let Some(plan) = ClipPlan::new(fb.width(), fb.height(), x, y, width, height) else {
		log::trace!("{width}x{height} sprite at ({x}, {y}) is off-screen");
		return Ok(());
	};
	log::trace!("{mode} blit at ({x}, {y}): {plan:?}");

	let shift = plan.y_offset;
	let target = Target::new(fb);
	match mode {
		DrawMode::Unmasked => {
			let keep = !(0xFFu16 << shift);
			composite(target, &plan, width, bitmap, |_| keep, |dst, src, keep| (dst & keep) | src);
		}
		DrawMode::SelfMask => {
			composite(target, &plan, width, bitmap, |_| 0, |dst, src, _| dst | src);
		}
		DrawMode::SelfMaskErase => {
			composite(target, &plan, width, bitmap, |_| 0, |dst, src, _| dst & !src);
		}
		DrawMode::ExternalMask => {
			composite(
				target,
				&plan,
				width,
				bitmap,
				|i| !(u16::from(mask[i]) << shift),
				|dst, src, keep| (dst & keep) | src,
			);
		}
		DrawMode::InterleavedMaskPlusColor | DrawMode::AutoDetect => {
			unreachable!("{mode} is resolved or rejected above")
		}
	}

	Ok(())
}

#[inline]
fn check_plane(stride: usize, plane: &[u8]) -> Result<(), SpriteError> {
	if plane.len() < stride {
		return Err(SpriteError::InsufficientData {
			expected: stride,
			actual: plane.len(),
		});
	}
	Ok(())
}

/// Destination pages plus the geometry needed to address them.
struct Target<'a> {
	pages: &'a mut [u8],
	screen_width: usize,
	last_page: i32,
}

impl<'a> Target<'a> {
	fn new<B: PageBuffer + ?Sized>(fb: &'a mut B) -> Self {
		let screen_width = fb.width();
		let last_page = fb.page_count() as i32 - 1;
		Self {
			pages: fb.pages_mut(),
			screen_width,
			last_page,
		}
	}
}

/// Runs the row/column loop shared by every mode.
///
/// `keep` yields the 16-bit word of destination bits to preserve for a source
/// index (already shifted); `op` combines a destination byte with the matching
/// source and keep bytes.
fn composite(
	target: Target<'_>,
	plan: &ClipPlan,
	width: u8,
	bitmap: &[u8],
	keep: impl Fn(usize) -> u16,
	op: impl Fn(u8, u8, u8) -> u8,
) {
	let Target {
		pages,
		screen_width,
		last_page,
	} = target;
	let shift = plan.y_offset;
	let width = width as usize;

	for row in 0..plan.rows {
		let page = plan.start_page + row as i32;
		let src_row = (plan.skip_rows + row) * width + plan.x_offset;

		for col in 0..plan.rendered_width {
			let src = src_row + col;
			let bits = u16::from(bitmap[src]) << shift;
			let kept = keep(src);

			if page >= 0 {
				let i = page as usize * screen_width + plan.dest_x + col;
				pages[i] = op(pages[i], bits as u8, kept as u8);
			}

			if shift != 0 && page < last_page {
				let i = (page + 1) as usize * screen_width + plan.dest_x + col;
				pages[i] = op(pages[i], (bits >> 8) as u8, (kept >> 8) as u8);
			}
		}
	}
}
