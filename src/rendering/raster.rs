//! Rasterizer: executes a display list on an RGBA canvas and encodes it.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::font::Typeface;
use crate::rendering::paint::PaintCommand;
use crate::{CanvasSize, Error, Result};

/// Colour of a freshly created canvas: white at zero alpha.
pub const CLEAR: [u8; 4] = [255, 255, 255, 0];

/// Encoding backend. Checked before anything is drawn or written so that a
/// missing capability never leaves a partial file behind.
pub trait Codec {
    fn name(&self) -> &'static str;

    fn ensure_available(&self) -> Result<()>;

    fn encode(&self, canvas: &RgbaImage) -> Result<Vec<u8>>;
}

/// RGBA PNG through the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngCodec;

impl Codec for PngCodec {
    fn name(&self) -> &'static str {
        "png"
    }

    fn ensure_available(&self) -> Result<()> {
        if ImageFormat::Png.writing_enabled() {
            Ok(())
        } else {
            Err(Error::MissingCapability(
                "PNG encoding is not compiled in; rebuild with the `png` feature of the `image` crate enabled".into(),
            ))
        }
    }

    fn encode(&self, canvas: &RgbaImage) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        canvas.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}

pub fn blank_canvas(size: CanvasSize) -> RgbaImage {
    RgbaImage::from_pixel(size.width, size.height, Rgba(CLEAR))
}

/// Draw `commands` in order onto a fresh canvas. Shapes replace the pixels
/// they cover; nothing is alpha-composited.
pub fn rasterize(commands: &[PaintCommand], size: CanvasSize, typeface: &Typeface) -> RgbaImage {
    let mut canvas = blank_canvas(size);
    for cmd in commands {
        paint(&mut canvas, cmd, typeface);
    }
    canvas
}

fn paint(canvas: &mut RgbaImage, cmd: &PaintCommand, typeface: &Typeface) {
    match cmd {
        PaintCommand::SolidRect { x, y, width, height, rgba } => {
            if *width == 0 || *height == 0 {
                return;
            }
            let color = Rgba([rgba.0, rgba.1, rgba.2, rgba.3]);
            draw_filled_rect_mut(canvas, Rect::at(*x, *y).of_size(*width, *height), color);
        }
        PaintCommand::StrokeRect { x, y, width, height, stroke, rgba } => {
            let color = Rgba([rgba.0, rgba.1, rgba.2, rgba.3]);
            for ring in 0..*stroke {
                let w = width.saturating_sub(2 * ring);
                let h = height.saturating_sub(2 * ring);
                if w == 0 || h == 0 {
                    break;
                }
                let inset = ring as i32;
                draw_hollow_rect_mut(canvas, Rect::at(x + inset, y + inset).of_size(w, h), color);
            }
        }
        PaintCommand::Text { x, y, text, size, rgba } => {
            typeface.draw(canvas, *x, *y, text, *size, *rgba);
        }
    }
}
