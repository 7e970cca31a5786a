//! Screen-edge and compositing scenarios on a 128x64 screen.

use log::info;
use pagesprite_rs::prelude::*;

use crate::{column_at, sprite};

#[test_log::test]
fn solid_block_below_page_boundary() {
	let mut fb = Framebuffer::new(128, 64);
	let block = sprite(8, 8, &[&[0xFF; 8]]);

	fb.draw_overwrite(4, 10, &block, 0).unwrap();

	let upper = fb.page_row(1).unwrap();
	let lower = fb.page_row(2).unwrap();
	assert_eq!(&upper[4..12], &[0xFC; 8]);
	assert_eq!(&lower[4..12], &[0x03; 8]);
	assert_eq!(fb.lit_pixels(), 64);
	info!("block spans pages 1 and 2");
}

#[test_log::test]
fn every_vertical_offset_reads_back() {
	let pattern = [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81];
	let cross = sprite(8, 8, &[&pattern]);

	for y in 0..16i16 {
		let mut fb = Framebuffer::new(128, 64);
		fb.fill(0x55);
		fb.draw_overwrite(60, 20 + y, &cross, 0).unwrap();

		for (col, expected) in pattern.iter().enumerate() {
			assert_eq!(column_at(&fb, 60 + col, (20 + y) as usize), *expected, "y {y} col {col}");
		}
	}
}

#[test_log::test]
fn left_edge_straddle() {
	let pattern = [0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF];
	let ramp = sprite(8, 8, &[&pattern]);
	let mut fb = Framebuffer::new(128, 64);

	fb.draw_overwrite(-3, 0, &ramp, 0).unwrap();

	for col in 0..128 {
		let expected = pattern.get(col + 3).copied().unwrap_or(0);
		assert_eq!(column_at(&fb, col, 0), expected, "col {col}");
	}
}

#[test_log::test]
fn corners_clip_on_both_axes() {
	let block = sprite(16, 16, &[&[0xFF; 32]]);
	let mut fb = Framebuffer::new(128, 64);

	fb.draw_overwrite(-12, -13, &block, 0).unwrap();
	assert_eq!(fb.lit_pixels(), 4 * 3);

	fb.clear();
	fb.draw_overwrite(125, 61, &block, 0).unwrap();
	assert_eq!(fb.lit_pixels(), 3 * 3);
	assert!(fb.get_pixel(127, 63));
}

#[test_log::test]
fn fully_outside_leaves_buffer_alone() {
	let block = sprite(16, 16, &[&[0xFF; 32]]);
	let mask = [0xFF; 32];
	let mut fb = Framebuffer::new(128, 64);
	fb.fill(0x3C);
	let before = fb.clone();

	for (x, y) in [(-16, 10), (128, 10), (10, -16), (10, 64), (-300, 300)] {
		for mode in [DrawMode::Unmasked, DrawMode::SelfMask, DrawMode::SelfMaskErase] {
			fb.draw(x, y, &block, 0, None, 0, mode).unwrap();
		}
		fb.draw_external_mask(x, y, &block, &mask, 0, 0).unwrap();
	}

	assert_eq!(fb, before);
}

#[test_log::test]
fn masked_sprite_over_pattern() {
	// 8x8 ring: outline drawn, inside punched to black, outside untouched
	let ring = sprite(8, 8, &[&[0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00]]);
	let mask = [0x00, 0x3C, 0x7E, 0x7E, 0x7E, 0x7E, 0x3C, 0x00];
	let mut fb = Framebuffer::new(128, 64);
	fb.fill(0xFF);

	fb.draw_external_mask(0, 0, &ring, &mask, 0, 0).unwrap();

	assert_eq!(column_at(&fb, 0, 0), 0xFF);
	assert_eq!(column_at(&fb, 2, 0), 0xC3);
	assert_eq!(column_at(&fb, 1, 0), 0xFF);
	assert_eq!(column_at(&fb, 7, 0), 0xFF);
}

#[test_log::test]
fn plus_mask_reports_unsupported() {
	let interleaved = sprite(2, 8, &[&[0xFF; 4]]);
	let mut fb = Framebuffer::new(128, 64);

	let err = fb.draw_plus_mask(0, 0, &interleaved, 0).unwrap_err();

	assert_eq!(err, SpriteError::UnsupportedMode(DrawMode::InterleavedMaskPlusColor));
	assert_eq!(err.to_string(), "Unsupported draw mode: interleaved_mask_plus_color");
	assert_eq!(fb.lit_pixels(), 0);
}
