//! Workshop Template Generator
//!
//! Draws the reference image an artist paints over when producing the
//! background art for The Workshop: a 360×640 transparent canvas marked
//! with the zones to paint, the zones that must stay transparent for
//! animated elements (radio and plant), optional zones, guides and a
//! legend.
//!
//! # Example
//!
//! ```no_run
//! use workshop_template::{generate, usage_text, TemplateConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TemplateConfig::default();
//! let shot = generate(&config)?;
//! assert_eq!((shot.width, shot.height), (360, 640));
//! print!("{}", usage_text(&config.output));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod font;
pub mod rendering;

pub use rendering::raster::{Codec, PngCodec};
pub use rendering::Screenshot;

/// File name written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "workshop-template.png";

/// Configuration for one generator run
///
/// The defaults reproduce the bare invocation: write
/// `workshop-template.png` into the working directory, preferring a
/// TrueType font and falling back to the built-in bitmap font.
///
/// # Examples
///
/// ```
/// let cfg = workshop_template::TemplateConfig::default();
/// assert_eq!(cfg.output.to_str(), Some("workshop-template.png"));
/// assert!(!cfg.bitmap_font);
/// ```
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    /// Where the PNG is written (overwritten if present)
    pub output: PathBuf,
    /// TrueType font tried before the built-in candidates
    pub font: Option<PathBuf>,
    /// Skip TrueType lookup and use the bitmap font; output is then
    /// identical on every machine
    pub bitmap_font: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            font: None,
            bitmap_font: false,
        }
    }
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 360,
            height: 640,
        }
    }
}

/// Render the template and write it to `config.output` as PNG.
pub fn generate(config: &TemplateConfig) -> Result<Screenshot> {
    generate_with(config, &PngCodec)
}

/// Same as [`generate`] with an explicit codec.
///
/// The codec is checked before anything touches the filesystem, so an
/// unavailable codec leaves no output file. Write failures are returned
/// as-is; the file is written in place without a temporary copy.
pub fn generate_with(config: &TemplateConfig, codec: &dyn Codec) -> Result<Screenshot> {
    let shot = rendering::render_template(config, codec)?;
    std::fs::write(&config.output, &shot.png_data)?;
    log::info!(
        "wrote {} ({}x{}, {} bytes, {} sha256 {})",
        config.output.display(),
        shot.width,
        shot.height,
        shot.png_data.len(),
        codec.name(),
        shot.digest()
    );
    Ok(shot)
}

/// The region table as pretty JSON.
pub fn layout_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(rendering::layout::template())?)
}

/// Instructions printed after a successful run.
pub fn usage_text(output: &Path) -> String {
    let name = output.display();
    format!(
        "Template created: {name}\n\
         \n\
         How to use:\n\
         1. Open {name} in your image editor\n\
         2. Draw your background in the blue areas\n\
         3. IMPORTANT: Leave the red areas transparent (delete that layer)\n\
         4. Save as 'workshop-day.png' (keep transparency!)\n\
         5. Create 'workshop-night.png' (same layout, darker colors)\n\
         6. Drop both files in assets/placeholder/\n\
         \n\
         The radio and plant will animate on top of your background!\n"
    )
}
