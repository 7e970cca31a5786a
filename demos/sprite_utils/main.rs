//! Sprite CLI Utility
//!
//! A command-line tool for inspecting sprite resources and rendering draw scenes
//! into a page-packed framebuffer.
//!
//! # Features
//!
//! - **info**: Display a resource's dimensions, frame stride and frame count
//! - **render**: Run the draws of a JSON scene and export the result (PNG, ASCII, hex pages)
//! - **scatter**: Draw one resource at many random positions to exercise clipping
//!
//! # Scene Format
//!
//! ```json
//! {
//!   "screen": { "width": 128, "height": 64 },
//!   "sprites": { "ball": { "data": [8, 8, 60, 126, 255, 255, 255, 255, 126, 60] } },
//!   "draws": [ { "sprite": "ball", "x": -3, "y": 10, "mode": "self_mask" } ]
//! }
//! ```
//!
//! Sprite data can also be loaded from a binary resource with `"path"` instead of `"data"`.
//!
//! # Usage Examples
//!
//! ```bash
//! # Display resource information
//! cargo run --example sprite_utils -- info ball.bin
//!
//! # Render a scene to PNG at 4x scale and print it as ASCII art
//! cargo run --example sprite_utils -- render demos/scenes/edges.json -o edges.png --scale 4 --ascii
//!
//! # Dump every page of the rendered framebuffer in hex
//! cargo run --example sprite_utils -- render demos/scenes/edges.json --hex
//!
//! # Scatter 200 copies of a resource with a fixed seed
//! cargo run --example sprite_utils -- scatter ball.bin --count 200 --seed 7 -o scatter.png
//! ```

use std::{
	collections::BTreeMap,
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::{GrayImage, Luma, imageops::FilterType};
use log::{info, warn};
use pagesprite_rs::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Info(args) => run_info(args),
		Command::Render(args) => run_render(args),
		Command::Scatter(args) => run_scatter(args),
	}
}

#[derive(Parser)]
#[command(name = "sprite_utils")]
#[command(author = "pagesprite-rs project")]
#[command(version)]
#[command(about = "Sprite utility - inspect resources and render scenes", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Display information about a sprite resource
	Info(InfoArgs),
	/// Render a JSON scene into a framebuffer
	Render(RenderArgs),
	/// Draw a resource at random positions
	Scatter(ScatterArgs),
}

#[derive(Args)]
struct InfoArgs {
	/// Input resource file path
	#[arg(value_name = "RESOURCE")]
	input: PathBuf,

	/// Print every frame as ASCII art
	#[arg(short, long)]
	frames: bool,
}

/// Output options shared by the drawing commands
#[derive(Args)]
struct OutputArgs {
	/// Output PNG file path
	#[arg(short, long, value_name = "OUTPUT_PNG")]
	output: Option<PathBuf>,

	/// PNG upscaling factor
	#[arg(long, default_value_t = 1)]
	scale: u32,

	/// Print the framebuffer as ASCII art
	#[arg(short, long)]
	ascii: bool,

	/// Print every page as hex
	#[arg(long)]
	hex: bool,
}

#[derive(Args)]
struct RenderArgs {
	/// Input scene file path
	#[arg(value_name = "SCENE_JSON")]
	scene: PathBuf,

	/// Stop at the first failed draw instead of skipping it
	#[arg(long)]
	strict: bool,

	#[command(flatten)]
	output: OutputArgs,
}

#[derive(Args)]
struct ScatterArgs {
	/// Input resource file path
	#[arg(value_name = "RESOURCE")]
	input: PathBuf,

	/// Number of draws
	#[arg(short, long, default_value_t = 100)]
	count: usize,

	/// Random seed
	#[arg(short, long, default_value_t = 0)]
	seed: u64,

	/// Draw mode for every copy
	#[arg(short, long, default_value = "self_mask")]
	mode: DrawMode,

	/// Screen width in pixels
	#[arg(long, env = "PAGESPRITE_WIDTH", default_value_t = DEFAULT_WIDTH)]
	width: usize,

	/// Screen height in pixels
	#[arg(long, env = "PAGESPRITE_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
	height: usize,

	#[command(flatten)]
	output: OutputArgs,
}

/// Scene description loaded from JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Scene {
	/// Screen dimensions
	#[serde(default)]
	screen: ScreenSize,
	/// Named sprite and mask resources
	#[serde(default)]
	sprites: BTreeMap<String, SpriteSource>,
	/// Draw calls, executed in order
	#[serde(default)]
	draws: Vec<DrawCall>,
}

/// Where a resource's bytes come from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SpriteSource {
	/// Inline bytes
	Inline {
		/// Resource bytes
		data: Vec<u8>,
	},
	/// Binary file, relative to the scene file
	File {
		/// Resource path
		path: PathBuf,
	},
}

impl SpriteSource {
	fn load(&self, base: &Path) -> Result<Vec<u8>> {
		match self {
			SpriteSource::Inline {
				data,
			} => Ok(data.clone()),
			SpriteSource::File {
				path,
			} => {
				let path = base.join(path);
				fs::read(&path).with_context(|| format!("Cannot read resource {}", path.display()))
			}
		}
	}
}

/// One draw call of a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DrawCall {
	/// Sprite name
	sprite: String,
	/// Destination x
	x: i16,
	/// Destination y
	y: i16,
	/// Animation frame
	#[serde(default)]
	frame: u8,
	/// Mask plane name
	#[serde(default)]
	mask: Option<String>,
	/// Mask frame
	#[serde(default)]
	mask_frame: u8,
	/// Compositing mode
	#[serde(default)]
	mode: DrawMode,
}

fn run_info(args: InfoArgs) -> Result<()> {
	let bytes =
		fs::read(&args.input).with_context(|| format!("Cannot read {}", args.input.display()))?;
	let resource = Resource::new(&bytes)?;
	let header = resource.header();

	println!("Resource: {}", args.input.display());
	println!("  Dimensions: {header}");
	println!("  Page rows: {}", header.page_rows());
	println!("  Frame stride: {} bytes", header.frame_stride());
	println!("  Frames: {}", resource.frame_count(1));
	println!("  Interleaved frames: {}", resource.frame_count(2));

	let trailing = resource.data().len() % header.frame_stride();
	if trailing != 0 {
		warn!("{trailing} trailing bytes do not form a complete frame");
	}

	if args.frames {
		for index in 0..resource.frame_count(1).min(256) {
			let mut fb = Framebuffer::new(header.width as usize, header.height as usize);
			fb.draw_overwrite(0, 0, &bytes, index as u8)?;
			println!("\nFrame #{index}:");
			print!("{}", ascii_art(&fb));
		}
	}

	Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
	let text = fs::read_to_string(&args.scene)
		.with_context(|| format!("Cannot read scene {}", args.scene.display()))?;
	let scene: Scene = serde_json::from_str(&text)
		.with_context(|| format!("Invalid scene {}", args.scene.display()))?;
	let base = args.scene.parent().unwrap_or(Path::new("."));

	let mut resources = BTreeMap::new();
	for (name, source) in &scene.sprites {
		resources.insert(name.as_str(), source.load(base)?);
	}

	let mut fb = new_screen(scene.screen)?;
	info!(
		"Rendering {} draws on a {}x{} screen",
		scene.draws.len(),
		scene.screen.width,
		scene.screen.height
	);

	for (index, call) in scene.draws.iter().enumerate() {
		let Some(bitmap) = resources.get(call.sprite.as_str()) else {
			bail!("Draw #{index} references unknown sprite {:?}", call.sprite);
		};
		let mask = match &call.mask {
			Some(name) => match resources.get(name.as_str()) {
				Some(mask) => Some(mask.as_slice()),
				None => bail!("Draw #{index} references unknown mask {name:?}"),
			},
			None => None,
		};

		let result = fb.draw(call.x, call.y, bitmap, call.frame, mask, call.mask_frame, call.mode);
		match result {
			Ok(()) => info!("  [{index}] {} {} at ({}, {})", call.mode, call.sprite, call.x, call.y),
			Err(e) if args.strict => {
				return Err(e).with_context(|| format!("Draw #{index} failed"));
			}
			Err(e) => warn!("  [{index}] skipped: {e}"),
		}
	}

	write_outputs(&fb, &args.output)
}

fn run_scatter(args: ScatterArgs) -> Result<()> {
	let bytes =
		fs::read(&args.input).with_context(|| format!("Cannot read {}", args.input.display()))?;
	let resource = Resource::new(&bytes)?;
	let frames = resource.frame_count(1);
	if frames == 0 {
		bail!("{} holds no complete frame", args.input.display());
	}

	let mut fb = new_screen(ScreenSize {
		width: args.width,
		height: args.height,
	})?;
	let mut rng = SmallRng::seed_from_u64(args.seed);

	// range covers every partially visible position
	let (w, h) = (i16::from(resource.width()), i16::from(resource.height()));
	let (sw, sh) = (args.width as i16, args.height as i16);

	for _ in 0..args.count {
		let x = rng.random_range(-w..=sw);
		let y = rng.random_range(-h..=sh);
		let frame = rng.random_range(0..frames.min(256)) as u8;
		fb.draw(x, y, &bytes, frame, None, 0, args.mode)?;
	}

	info!(
		"Scattered {} copies, {} of {} pixels lit",
		args.count,
		fb.lit_pixels(),
		args.width * args.height
	);

	write_outputs(&fb, &args.output)
}

fn new_screen(size: ScreenSize) -> Result<Framebuffer> {
	let limit = i16::MAX as usize;
	if size.width == 0 || size.height == 0 || size.width > limit || size.height > limit {
		bail!("Unsupported screen size {}x{}", size.width, size.height);
	}
	Ok(Framebuffer::with_size(size))
}

fn write_outputs(fb: &Framebuffer, output: &OutputArgs) -> Result<()> {
	if output.ascii {
		print!("{}", ascii_art(fb));
	}

	if output.hex {
		for page in 0..fb.page_count() {
			if let Some(row) = fb.page_row(page) {
				println!("page {page}: {}", hex::encode(row));
			}
		}
	}

	if let Some(path) = &output.output {
		if output.scale == 0 {
			bail!("Scale must be at least 1");
		}
		let image = to_image(fb, output.scale);
		image.save(path).with_context(|| format!("Cannot write {}", path.display()))?;
		info!("✓ Saved {}x{} image to {}", image.width(), image.height(), path.display());
	}

	Ok(())
}

fn to_image(fb: &Framebuffer, scale: u32) -> GrayImage {
	let (width, height) = (fb.width() as u32, fb.height() as u32);
	let image = GrayImage::from_fn(width, height, |x, y| {
		Luma([if fb.get_pixel(x as usize, y as usize) {
			255
		} else {
			0
		}])
	});

	if scale == 1 {
		return image;
	}
	image::imageops::resize(&image, width * scale, height * scale, FilterType::Nearest)
}

fn ascii_art(fb: &Framebuffer) -> String {
	let mut art = String::with_capacity((fb.width() + 1) * fb.height());
	for y in 0..fb.height() {
		for x in 0..fb.width() {
			art.push(if fb.get_pixel(x, y) {
				'#'
			} else {
				'.'
			});
		}
		art.push('\n');
	}
	art
}
