//! Display list executed by the rasterizer

use serde::Serialize;

/// Straight RGBA tuple, written to the canvas without blending.
pub type Rgba = (u8, u8, u8, u8);

/// The two label sizes used across the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// 12 px, headings and zone names
    Regular,
    /// 10 px, explanatory lines
    Small,
}

impl TextSize {
    pub fn px(self) -> f32 {
        match self {
            TextSize::Regular => 12.0,
            TextSize::Small => 10.0,
        }
    }
}

/// `width`/`height` are pixel counts here; the layout has already resolved
/// inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    /// `stroke` rings drawn inward from the outer edge
    StrokeRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        stroke: u32,
        rgba: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        size: TextSize,
        rgba: Rgba,
    },
}
