//! This crate provides sprite drawing for page-packed monochrome framebuffers.
//!
//! # Components
//!
//! - **Framebuffer**: 8-row pages, one byte per column, bit 0 topmost
//! - **Resources**: `[width][height]` header followed by animation frames in framebuffer layout
//! - **Frame locator**: resolves the bytes of an animation frame and its mask
//! - **Page blitter**: clips against the screen edges and composites each byte into one or two pages
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use pagesprite_types::prelude::*;
//!
//! let mut fb = Framebuffer::new(128, 64);
//! let block = [4, 4, 0x0F, 0x0F, 0x0F, 0x0F];
//!
//! fb.draw_self_masked(-2, 30, &block, 0).unwrap();
//! assert_eq!(fb.lit_pixels(), 8);
//! ```

pub mod error;
pub mod framebuffer;
pub mod sprite;

/// `use pagesprite_types::prelude::*;` to import commonly used items.
pub mod prelude;
