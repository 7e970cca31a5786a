//! `pagesprite-rs` draws animated monochrome sprites into page-packed framebuffers.
//!
//! See [`pagesprite_types`] for the resource format and the drawing rules.

pub use pagesprite_types::*;
