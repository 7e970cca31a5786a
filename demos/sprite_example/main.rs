//! Sprite Drawing Example
//!
//! This example walks through every draw mode on a small screen.
//!
//! Features demonstrated:
//! - Drawing opaque, self-masked and erasing sprites
//! - Using a separate mask plane shared by every animation frame
//! - Clipping against all four screen edges
//! - Drawing into a caller-owned buffer through `PageSlice`
//! - Handling the unsupported interleaved mode

use log::{info, warn};

use pagesprite_rs::prelude::*;

/// 8x8 ball
const BALL: [u8; 10] = [8, 8, 0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C];

/// 4x8 blinker with two frames
const BLINKER: [u8; 10] = [4, 8, 0x18, 0x3C, 0x3C, 0x18, 0x00, 0x18, 0x18, 0x00];

/// Mask for one `BLINKER` frame
const BLINKER_MASK: [u8; 4] = [0x3C, 0x7E, 0x7E, 0x3C];

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	info!("=== Sprite Drawing Example ===\n");

	// Example 1: Draw modes
	example_draw_modes();

	// Example 2: Animation frames with a shared mask
	example_animation();

	// Example 3: Clipping
	example_clipping();

	// Example 4: Borrowed buffer
	example_borrowed_buffer();

	// Example 5: Unsupported mode
	example_unsupported();

	info!("\n✓ Sprite examples complete!");
}

/// Example 1: Draw modes
fn example_draw_modes() {
	info!("Example 1: Draw modes\n");

	let mut fb = Framebuffer::new(32, 16);
	fb.fill(0xAA);

	for (x, mode) in [(0, DrawMode::Unmasked), (8, DrawMode::SelfMask), (16, DrawMode::SelfMaskErase)]
	{
		match fb.draw(x, 3, &BALL, 0, None, 0, mode) {
			Ok(()) => info!("  {mode} at x = {x}"),
			Err(e) => warn!("  {mode} failed: {e}"),
		}
	}

	log_screen(&fb);
}

/// Example 2: Animation frames with a shared mask
fn example_animation() {
	info!("Example 2: Animation frames\n");

	let resource = match Resource::new(&BLINKER) {
		Ok(resource) => resource,
		Err(e) => {
			warn!("✗ Invalid resource: {e}");
			return;
		}
	};
	info!("  Blinker: {} with {} frames", resource.header(), resource.frame_count(1));

	let mut fb = Framebuffer::new(16, 8);
	fb.fill(0xFF);
	for frame in 0..resource.frame_count(1) as u8 {
		let x = i16::from(frame) * 6;
		if let Err(e) = fb.draw_external_mask(x, 0, &BLINKER, &BLINKER_MASK, frame, 0) {
			warn!("  frame {frame} failed: {e}");
		}
	}

	log_screen(&fb);
}

/// Example 3: Clipping
fn example_clipping() {
	info!("Example 3: Clipping\n");

	let mut fb = Framebuffer::new(24, 16);
	for (x, y) in [(-4, -4), (20, -3), (-5, 11), (19, 12), (40, 40)] {
		if let Some(plan) = ClipPlan::new(fb.width(), fb.height(), x, y, 8, 8) {
			info!("  ({x:3}, {y:3}): {} columns, {} page rows", plan.rendered_width, plan.rows);
		} else {
			info!("  ({x:3}, {y:3}): off-screen");
		}
		if let Err(e) = fb.draw_self_masked(x, y, &BALL, 0) {
			warn!("  draw failed: {e}");
		}
	}

	log_screen(&fb);
}

/// Example 4: Borrowed buffer
fn example_borrowed_buffer() {
	info!("Example 4: Borrowed buffer\n");

	let mut storage = [0u8; 16 * 2];
	match PageSlice::new(&mut storage, 16, 16) {
		Ok(mut screen) => {
			if let Err(e) = screen.draw_overwrite(4, 5, &BALL, 0) {
				warn!("  draw failed: {e}");
			}
		}
		Err(e) => warn!("✗ {e}"),
	}

	info!("  page 0: {:02X?}", &storage[..16]);
	info!("  page 1: {:02X?}", &storage[16..]);
	info!("");
}

/// Example 5: Unsupported mode
fn example_unsupported() {
	info!("Example 5: Interleaved mask and color\n");

	let interleaved = [4, 8, 0xFF, 0x3C, 0xFF, 0x7E, 0xFF, 0x7E, 0xFF, 0x3C];
	let mut fb = Framebuffer::new(16, 8);
	match fb.draw_plus_mask(0, 0, &interleaved, 0) {
		Ok(()) => info!("  drawn"),
		Err(e) => info!("  ✗ {e}"),
	}
	info!("");
}

fn log_screen(fb: &Framebuffer) {
	for y in 0..fb.height() {
		let line: String = (0..fb.width())
			.map(|x| {
				if fb.get_pixel(x, y) {
					'#'
				} else {
					'.'
				}
			})
			.collect();
		info!("  {line}");
	}
	info!("");
}
