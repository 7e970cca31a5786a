//! Prelude module for `pagesprite_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use pagesprite_types::prelude::*;
//!
//! let mut fb = Framebuffer::default();
//! let dot = [1, 1, 0x01];
//! fb.draw(10, 10, &dot, 0, None, 0, DrawMode::AutoDetect).unwrap();
//! assert!(fb.get_pixel(10, 10));
//! ```

#[doc(inline)]
pub use crate::error::SpriteError;

#[doc(inline)]
pub use crate::framebuffer::{
	DEFAULT_HEIGHT, DEFAULT_WIDTH, Framebuffer, PAGE_HEIGHT, PageBuffer, PageSlice, ScreenSize,
};

#[doc(inline)]
pub use crate::sprite::{
	ClipPlan, DrawMode, FrameLocation, Header, Resource, Sprites, blit, locate,
};
