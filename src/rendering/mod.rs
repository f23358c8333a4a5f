//! Rendering pipeline: layout table → paint commands → canvas → PNG bytes

pub mod layout;
pub mod paint;
pub mod raster;

use sha2::{Digest, Sha256};

use crate::font::Typeface;
use crate::{CanvasSize, Result, TemplateConfig};
use raster::Codec;

/// An encoded template image.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Hex SHA-256 of the encoded bytes; equal across identical runs.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Render the template with the font chosen by `config` and encode it.
///
/// The codec is checked first: when it is unavailable nothing is drawn.
pub fn render_template(config: &TemplateConfig, codec: &dyn Codec) -> Result<Screenshot> {
    codec.ensure_available()?;

    let typeface = if config.bitmap_font {
        Typeface::bitmap()
    } else {
        Typeface::load(config.font.as_deref())
    };
    log::debug!("typeface: {:?}", typeface);

    let size = CanvasSize::default();
    let commands = layout::layout_template(size);
    log::debug!("{} paint commands", commands.len());

    let canvas = raster::rasterize(&commands, size, &typeface);
    let png_data = codec.encode(&canvas)?;

    Ok(Screenshot { width: size.width, height: size.height, png_data })
}
