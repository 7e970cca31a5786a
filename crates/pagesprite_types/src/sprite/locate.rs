//! Frame lookup within sprite and mask resources.

use super::{
	mode::DrawMode,
	resource::{Header, constants::HEADER_SIZE},
};
use crate::error::SpriteError;

/// Where a requested frame lives inside its resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameLocation {
	/// Sprite width in pixels
	pub width: u8,

	/// Sprite height in pixels
	pub height: u8,

	/// Byte offset of the frame inside the bitmap resource, header included
	pub bitmap_offset: usize,

	/// Byte offset of the mask frame inside the mask plane, if a separate mask is read
	pub mask_offset: Option<usize>,
}

impl FrameLocation {
	/// Returns the number of bytes in one frame plane.
	#[inline]
	pub fn frame_stride(&self) -> usize {
		Header {
			width: self.width,
			height: self.height,
		}
		.frame_stride()
	}
}

/// Locates `frame` in `resource` and `mask_frame` in `mask`.
///
/// The mask plane has no header: mask frame `n` starts at `n * stride`. Mask
/// frames are indexed independently so one static mask can serve every frame
/// of an animation. `mask` is only read by modes that resolve to
/// [`DrawMode::ExternalMask`]; under [`DrawMode::InterleavedMaskPlusColor`] a
/// frame spans two planes.
///
/// # Errors
///
/// - [`SpriteError::InvalidResource`] if `resource` has no complete header
/// - [`SpriteError::ZeroDimension`] if the header declares an empty sprite
/// - [`SpriteError::InsufficientData`] if the requested frame, or mask frame,
///   extends past the end of its bytes
pub fn locate(
	resource: &[u8],
	frame: u8,
	mask: Option<&[u8]>,
	mask_frame: u8,
	mode: DrawMode,
) -> Result<FrameLocation, SpriteError> {
	let header = Header::from_bytes(resource)?;
	let stride = header.frame_stride() * mode.stride_factor();

	let bitmap_offset = HEADER_SIZE + frame as usize * stride;
	check_len(bitmap_offset + stride, resource.len())?;

	let mask_offset = match mask {
		Some(mask) if mode.resolve(true).uses_external_mask() => {
			let offset = mask_frame as usize * stride;
			check_len(offset + stride, mask.len())?;
			Some(offset)
		}
		_ => None,
	};

	log::trace!(
		"located frame {frame} of {header} sprite at {bitmap_offset} (mask: {mask_offset:?})"
	);

	Ok(FrameLocation {
		width: header.width,
		height: header.height,
		bitmap_offset,
		mask_offset,
	})
}

#[inline]
fn check_len(expected: usize, actual: usize) -> Result<(), SpriteError> {
	if expected > actual {
		return Err(SpriteError::InsufficientData {
			expected,
			actual,
		});
	}
	Ok(())
}
