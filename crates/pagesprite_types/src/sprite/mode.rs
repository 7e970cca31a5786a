//! Sprite compositing modes.

use std::fmt;

/// Compositing rule applied when a sprite is blitted onto the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
	/// Sprite pixels overwrite the destination, both on and off bits.
	Unmasked,

	/// Set bits are ORed into the destination; clear bits are transparent.
	SelfMask,

	/// Set bits clear the destination; clear bits are transparent.
	SelfMaskErase,

	/// A separate mask plane selects which destination bits are replaced.
	ExternalMask,

	/// Mask and color bytes interleaved within one resource.
	///
	/// Declared but not implemented: drawing in this mode reports
	/// [`SpriteError::UnsupportedMode`](crate::error::SpriteError::UnsupportedMode).
	InterleavedMaskPlusColor,

	/// [`ExternalMask`](Self::ExternalMask) when a mask is supplied,
	/// [`Unmasked`](Self::Unmasked) otherwise.
	#[default]
	AutoDetect,
}

impl DrawMode {
	/// All draw modes, in declaration order.
	pub const ALL: [DrawMode; 6] = [
		DrawMode::Unmasked,
		DrawMode::SelfMask,
		DrawMode::SelfMaskErase,
		DrawMode::ExternalMask,
		DrawMode::InterleavedMaskPlusColor,
		DrawMode::AutoDetect,
	];

	/// Resolves [`AutoDetect`](Self::AutoDetect) against the presence of a mask.
	/// Every other mode is returned unchanged.
	#[inline]
	pub fn resolve(self, has_mask: bool) -> Self {
		match self {
			DrawMode::AutoDetect if has_mask => DrawMode::ExternalMask,
			DrawMode::AutoDetect => DrawMode::Unmasked,
			other => other,
		}
	}

	/// Returns the per-frame stride multiplier of the resource layout.
	#[inline]
	pub fn stride_factor(self) -> usize {
		match self {
			DrawMode::InterleavedMaskPlusColor => 2,
			_ => 1,
		}
	}

	/// Returns `true` if the mode reads a separate mask plane.
	#[inline]
	pub fn uses_external_mask(self) -> bool {
		matches!(self, DrawMode::ExternalMask)
	}

	/// Returns the mode's snake-case name.
	pub fn name(self) -> &'static str {
		match self {
			DrawMode::Unmasked => "unmasked",
			DrawMode::SelfMask => "self_mask",
			DrawMode::SelfMaskErase => "self_mask_erase",
			DrawMode::ExternalMask => "external_mask",
			DrawMode::InterleavedMaskPlusColor => "interleaved_mask_plus_color",
			DrawMode::AutoDetect => "auto_detect",
		}
	}
}

impl fmt::Display for DrawMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for DrawMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		DrawMode::ALL
			.into_iter()
			.find(|mode| mode.name() == s)
			.ok_or_else(|| format!("unknown draw mode: {s}"))
	}
}
