//! Multi-frame resources and independent mask frames.

use pagesprite_rs::prelude::*;

use crate::{column_at, sprite};

#[test_log::test]
fn walks_every_frame() {
	let frames: Vec<[u8; 4]> = (0..4u8).map(|i| [1 << i, 2 << i, 4 << i, 8 << i]).collect();
	let refs: Vec<&[u8]> = frames.iter().map(|f| &f[..]).collect();
	let walker = sprite(4, 8, &refs);

	let resource = Resource::new(&walker).unwrap();
	assert_eq!(resource.frame_count(1), 4);

	for (index, frame) in frames.iter().enumerate() {
		let mut fb = Framebuffer::new(128, 64);
		fb.draw_overwrite(30, 5, &walker, index as u8).unwrap();
		for (col, expected) in frame.iter().enumerate() {
			assert_eq!(column_at(&fb, 30 + col, 5), *expected);
		}
	}
}

#[test_log::test]
fn second_frame_offset() {
	let two = sprite(3, 12, &[&[0x11; 6], &[0x22; 6]]);

	let location = locate(&two, 1, None, 0, DrawMode::Unmasked).unwrap();

	assert_eq!(location.bitmap_offset, 2 + 3 * 2);
	assert_eq!(&two[location.bitmap_offset..][..6], &[0x22; 6]);
}

#[test_log::test]
fn frame_past_the_end_is_rejected() {
	let one = sprite(3, 8, &[&[0xFF; 3]]);
	let mut fb = Framebuffer::new(128, 64);

	let err = fb.draw_overwrite(0, 0, &one, 1).unwrap_err();

	assert!(matches!(err, SpriteError::InsufficientData { .. }));
	assert_eq!(fb.lit_pixels(), 0);
}

#[test_log::test]
fn mask_frames_follow_their_own_index() {
	let body = sprite(1, 8, &[&[0xFF], &[0xFF]]);
	let masks = [0x0F, 0xF0];
	let mut fb = Framebuffer::new(128, 64);

	fb.draw_external_mask(0, 0, &body, &masks, 1, 0).unwrap();
	fb.draw_external_mask(1, 0, &body, &masks, 0, 1).unwrap();

	// unmasked sprite bits are still ORed in, so a solid body fills the column
	assert_eq!(column_at(&fb, 0, 0), 0xFF);
	assert_eq!(column_at(&fb, 1, 0), 0xFF);

	let hollow = sprite(1, 8, &[&[0x00]]);
	fb.fill(0xFF);
	fb.draw_external_mask(0, 0, &hollow, &masks, 0, 1).unwrap();
	assert_eq!(column_at(&fb, 0, 0), 0x0F);
}
