//! Label typeface: a TrueType font at two pixel sizes, or the built-in
//! 8×8 bitmap font when no TrueType file can be loaded.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::RgbaImage;

use crate::rendering::paint::{Rgba, TextSize};

/// Places `arial.ttf` is looked for, in order, after any explicit override.
pub const FONT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/arial.ttf",
    "/usr/share/fonts/TTF/arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BITMAP_ADVANCE: u32 = 8;
const BULLET: [u8; 8] = [0x00, 0x00, 0x18, 0x3C, 0x3C, 0x18, 0x00, 0x00];

#[derive(Debug)]
pub enum Typeface {
    TrueType {
        font: FontArc,
        regular: PxScale,
        small: PxScale,
    },
    /// Same glyphs for both sizes.
    Bitmap,
}

impl Typeface {
    /// Try `preferred`, then [`FONT_CANDIDATES`]; fall back to the bitmap
    /// font. Never fails and never warns.
    pub fn load(preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(FONT_CANDIDATES.iter().map(PathBuf::from));
        for path in candidates {
            if let Some(face) = Self::from_file(&path) {
                log::debug!("using font {}", path.display());
                return face;
            }
        }

        log::debug!("no TrueType font found, using built-in bitmap font");
        Typeface::Bitmap
    }

    pub fn bitmap() -> Self {
        Typeface::Bitmap
    }

    pub fn from_file(path: &Path) -> Option<Self> {
        let bytes = std::fs::read(path).ok()?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        let font = FontArc::try_from_vec(bytes).ok()?;
        let regular = em_scale(&font, TextSize::Regular.px());
        let small = em_scale(&font, TextSize::Small.px());
        Some(Typeface::TrueType { font, regular, small })
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, Typeface::Bitmap)
    }

    /// Horizontal advance of `text` in pixels.
    pub fn measure(&self, text: &str, size: TextSize) -> u32 {
        match self {
            Typeface::TrueType { font, .. } => {
                imageproc::drawing::text_size(self.scale(size), font, text).0
            }
            Typeface::Bitmap => text.chars().count() as u32 * BITMAP_ADVANCE,
        }
    }

    pub fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, text: &str, size: TextSize, rgba: Rgba) {
        let color = image::Rgba([rgba.0, rgba.1, rgba.2, rgba.3]);
        match self {
            Typeface::TrueType { font, .. } => {
                imageproc::drawing::draw_text_mut(canvas, color, x, y, self.scale(size), font, text);
            }
            Typeface::Bitmap => {
                let mut pen_x = x;
                for c in text.chars() {
                    if let Some(rows) = bitmap_glyph(c) {
                        blit_glyph(canvas, pen_x, y, &rows, color);
                    }
                    pen_x += BITMAP_ADVANCE as i32;
                }
            }
        }
    }

    fn scale(&self, size: TextSize) -> PxScale {
        match self {
            Typeface::TrueType { regular, small, .. } => match size {
                TextSize::Regular => *regular,
                TextSize::Small => *small,
            },
            Typeface::Bitmap => PxScale::from(BITMAP_ADVANCE as f32),
        }
    }
}

// Label sizes are em sizes; ab_glyph scales by ascent-to-descent height.
fn em_scale(font: &FontArc, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(em_px * font.height_unscaled() / upem),
        _ => PxScale::from(em_px),
    }
}

fn bitmap_glyph(c: char) -> Option<[u8; 8]> {
    if c == '•' {
        return Some(BULLET);
    }
    BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
}

fn blit_glyph(canvas: &mut RgbaImage, x: i32, y: i32, rows: &[u8; 8], color: image::Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    for (dy, row) in rows.iter().enumerate() {
        for dx in 0..8 {
            if row & (1 << dx) == 0 {
                continue;
            }
            let px = x + dx;
            let py = y + dy as i32;
            if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_falls_back_silently() {
        let face = Typeface::from_file(Path::new("/nonexistent/arial.ttf"));
        assert!(face.is_none());
        assert!(Typeface::bitmap().is_bitmap());
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        assert!(Typeface::from_bytes(vec![0u8; 64]).is_none());
    }

    #[test]
    fn bitmap_measure_is_fixed_advance() {
        let face = Typeface::bitmap();
        assert_eq!(face.measure("RADIO", TextSize::Regular), 40);
        assert_eq!(face.measure("RADIO", TextSize::Small), 40);
        assert_eq!(face.measure("", TextSize::Small), 0);
    }

    #[test]
    fn bitmap_draw_writes_exact_colour() {
        let mut canvas = RgbaImage::new(16, 8);
        let face = Typeface::bitmap();
        face.draw(&mut canvas, 0, 0, "H", TextSize::Regular, (0, 0, 0, 255));

        let inked: Vec<_> = canvas.pixels().filter(|p| p.0[3] != 0).collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|p| p.0 == [0, 0, 0, 255]));
        // second cell stays untouched
        for y in 0..8 {
            for x in 8..16 {
                assert_eq!(canvas.get_pixel(x, y).0, [0, 0, 0, 0]);
            }
        }
    }

    #[test]
    fn bitmap_draw_clips_at_canvas_edges() {
        let mut canvas = RgbaImage::new(4, 4);
        let face = Typeface::bitmap();
        face.draw(&mut canvas, -3, -3, "WW", TextSize::Small, (255, 0, 0, 255));
        face.draw(&mut canvas, 2, 2, "WW", TextSize::Small, (255, 0, 0, 255));
        assert_eq!(canvas.dimensions(), (4, 4));
    }

    #[test]
    fn bullet_has_a_glyph() {
        assert!(bitmap_glyph('•').is_some());
        assert!(bitmap_glyph('A').is_some());
    }
}
