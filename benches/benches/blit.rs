//! Benchmark suite for page blitting
//!
//! Measures every compositing mode at several sprite sizes and clip positions.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pagesprite_benches::{generate_mask, generate_sprite, positions, sizes};
use pagesprite_types::prelude::*;
use std::hint::black_box;

const MODES: [DrawMode; 4] =
	[DrawMode::Unmasked, DrawMode::SelfMask, DrawMode::SelfMaskErase, DrawMode::ExternalMask];

/// Benchmark each compositing mode on a fully visible, unaligned sprite
fn bench_modes(c: &mut Criterion) {
	let mut group = c.benchmark_group("blit_modes");

	let (width, height) = sizes::MEDIUM;
	let sprite = generate_sprite(width, height, 1);
	let mask = generate_mask(width, height, 1);
	let (x, y) = positions::UNALIGNED;

	group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
	for mode in MODES {
		group.bench_with_input(BenchmarkId::new("draw", mode), &mode, |b, &mode| {
			let mut fb = Framebuffer::default();
			b.iter(|| {
				let result =
					fb.draw(black_box(x), black_box(y), &sprite, 0, Some(&mask), 0, mode);
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark sprite sizes from a single page row up to the whole screen
fn bench_sizes(c: &mut Criterion) {
	let mut group = c.benchmark_group("blit_sizes");

	let sizes = [
		("small", sizes::SMALL),
		("medium", sizes::MEDIUM),
		("large", sizes::LARGE),
		("full_screen", sizes::FULL_SCREEN),
	];

	for (name, (width, height)) in sizes {
		let sprite = generate_sprite(width, height, 1);
		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
		group.bench_with_input(BenchmarkId::new("overwrite", name), &sprite, |b, sprite| {
			let mut fb = Framebuffer::default();
			b.iter(|| {
				let result = fb.draw_overwrite(black_box(0), black_box(3), sprite, 0);
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark the clipping paths, including the off-screen early exit
fn bench_clipping(c: &mut Criterion) {
	let mut group = c.benchmark_group("blit_clipping");

	let (width, height) = sizes::MEDIUM;
	let sprite = generate_sprite(width, height, 1);

	let cases = [
		("aligned", positions::ALIGNED),
		("unaligned", positions::UNALIGNED),
		("top_left", positions::TOP_LEFT),
		("bottom_right", positions::BOTTOM_RIGHT),
		("off_screen", positions::OFF_SCREEN),
	];

	for (name, (x, y)) in cases {
		group.bench_function(name, |b| {
			let mut fb = Framebuffer::default();
			b.iter(|| {
				let result = fb.draw_self_masked(black_box(x), black_box(y), &sprite, 0);
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark frame lookup in a long animation strip
fn bench_locate(c: &mut Criterion) {
	let mut group = c.benchmark_group("locate");

	let sprite = generate_sprite(16, 16, 200);
	let mask = generate_mask(16, 16, 1);

	group.bench_function("frame_199", |b| {
		b.iter(|| {
			let result = locate(black_box(&sprite), 199, Some(&mask), 0, DrawMode::ExternalMask);
			black_box(result)
		});
	});

	group.finish();
}

criterion_group!(benches, bench_modes, bench_sizes, bench_clipping, bench_locate);

criterion_main!(benches);
