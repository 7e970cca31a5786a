//! Integration tests for sprite drawing through the `pagesprite-rs` facade.

mod animation;
mod scenarios;

use pagesprite_rs::prelude::*;

/// Builds a resource from a header and frames.
pub(crate) fn sprite(width: u8, height: u8, frames: &[&[u8]]) -> Vec<u8> {
	pagesprite_rs::sprite::resource::build(width, height, frames)
}

/// Reads back one 8-pixel column starting at screen row `y`.
pub(crate) fn column_at(fb: &Framebuffer, x: usize, y: usize) -> u8 {
	(0..8).fold(0, |acc, bit| acc | (u8::from(fb.get_pixel(x, y + bit)) << bit))
}
