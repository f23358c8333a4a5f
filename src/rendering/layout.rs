//! The template layout: one static table of regions and its expansion into
//! paint commands.
//!
//! Bounds follow the inclusive convention of the drawing model: a `Rect`
//! covers columns `x..=x + width` and rows `y..=y + height`, so the radio
//! zone at (50,50) of size 60×70 spans 61×71 pixels. Outlines are drawn
//! inward from those bounds after the fill, and labels are placed relative
//! to the region origin.

use serde::Serialize;

use super::paint::TextSize::{Regular, Small};
use super::paint::{PaintCommand, Rgba, TextSize};
use crate::CanvasSize;

/// Fill of the zones the artist should paint.
pub const DRAW_AREA: Rgba = (200, 230, 255, 80);
/// Fill of the zones that must stay transparent for animated elements.
pub const TRANSPARENT_AREA: Rgba = (255, 200, 200, 80);
pub const OUTLINE: Rgba = (100, 100, 100, 255);
pub const TEXT: Rgba = (0, 0, 0, 255);
pub const HIGHLIGHT: Rgba = (255, 100, 100, 200);
pub const GRID: Rgba = (200, 200, 200, 100);

const TITLE_BAR: Rgba = (50, 50, 50, 200);
const TITLE_TEXT: Rgba = (255, 255, 255, 255);
const WINDOW_LINE: Rgba = (100, 200, 100, 200);
const WINDOW_TEXT: Rgba = (0, 100, 0, 255);
const WINDOW_NOTE: Rgba = (0, 100, 0, 200);
const SHELF_LINE: Rgba = (150, 150, 100, 150);
const SHELF_TEXT: Rgba = (100, 100, 50, 200);
const BENCH_LINE: Rgba = (150, 100, 50, 150);
const BENCH_TEXT: Rgba = (100, 70, 30, 200);
const BENCH_NOTE: Rgba = (100, 70, 30, 150);
const FLOOR_LINE: Rgba = (139, 69, 19, 150);
const FLOOR_TEXT: Rgba = (139, 69, 19, 200);
const SPAWN_LINE: Rgba = (200, 150, 50, 150);
const SPAWN_TEXT: Rgba = (200, 150, 50, 200);
const LEGEND_PANEL: Rgba = (255, 255, 255, 220);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Inclusive corners `(x0, y0, x1, y1)`.
    pub fn corners(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.x + self.width as i32, self.y + self.height as i32)
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (x0, y0, x1, y1) = self.corners();
        px >= x0 && px <= x1 && py >= y0 && py <= y1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rect(Rect),
    /// Full-width horizontal rule centred on `y`; thickness comes from the outline.
    HRule { y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stroke {
    pub rgba: Rgba,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub dx: i32,
    pub dy: i32,
    pub text: &'static str,
    pub rgba: Rgba,
    pub size: TextSize,
}

/// What the artist is expected to do with a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Canvas furniture: border and title bar
    Frame,
    /// Paint here
    Draw,
    /// Must end up transparent; animated on top at runtime
    Transparent,
    /// Paint or leave empty for the runtime fallback
    Optional,
    /// Reference marks the artist paints around
    Guide,
    /// Legend panel and its swatches
    Legend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub kind: RegionKind,
    pub shape: Shape,
    pub fill: Option<Rgba>,
    pub outline: Option<Stroke>,
    pub labels: &'static [Label],
}

impl Region {
    /// Label anchor: the rect origin, or the left end of a rule.
    pub fn origin(&self) -> (i32, i32) {
        match self.shape {
            Shape::Rect(r) => (r.x, r.y),
            Shape::HRule { y } => (0, y),
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        match self.shape {
            Shape::Rect(r) => Some(r),
            Shape::HRule { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub spacing: u32,
    pub rgba: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Region(Region),
    Grid(Grid),
}

const fn label(dx: i32, dy: i32, text: &'static str, rgba: Rgba, size: TextSize) -> Label {
    Label { dx, dy, text, rgba, size }
}

const fn stroke(rgba: Rgba, width: u32) -> Option<Stroke> {
    Some(Stroke { rgba, width })
}

static TEMPLATE: &[Element] = &[
    Element::Region(Region {
        name: "border",
        kind: RegionKind::Frame,
        shape: Shape::Rect(Rect::new(0, 0, 359, 639)),
        fill: None,
        outline: stroke(OUTLINE, 2),
        labels: &[],
    }),
    Element::Grid(Grid { spacing: 40, rgba: GRID }),
    Element::Region(Region {
        name: "title",
        kind: RegionKind::Frame,
        shape: Shape::Rect(Rect::new(0, 0, 360, 25)),
        fill: Some(TITLE_BAR),
        outline: None,
        labels: &[label(100, 8, "Workshop Background Template", TITLE_TEXT, Regular)],
    }),
    Element::Region(Region {
        name: "background",
        kind: RegionKind::Draw,
        shape: Shape::Rect(Rect::new(5, 30, 350, 605)),
        fill: Some(DRAW_AREA),
        outline: None,
        labels: &[
            label(75, 10, "DRAW YOUR BACKGROUND HERE", TEXT, Regular),
            label(5, 25, "• Walls, floor, window frame, shelves", TEXT, Small),
            label(5, 40, "• Workbench surface, decorations", TEXT, Small),
            label(5, 55, "• Any background details you want!", TEXT, Small),
        ],
    }),
    Element::Region(Region {
        name: "radio",
        kind: RegionKind::Transparent,
        shape: Shape::Rect(Rect::new(50, 50, 60, 70)),
        fill: Some(TRANSPARENT_AREA),
        outline: stroke(HIGHLIGHT, 3),
        labels: &[
            label(5, 15, "RADIO", TEXT, Regular),
            label(-10, 30, "Leave", TEXT, Small),
            label(-10, 42, "transparent!", TEXT, Small),
            label(-10, 54, "(animated)", HIGHLIGHT, Small),
        ],
    }),
    Element::Region(Region {
        name: "plant",
        kind: RegionKind::Transparent,
        shape: Shape::Rect(Rect::new(280, 85, 40, 65)),
        fill: Some(TRANSPARENT_AREA),
        outline: stroke(HIGHLIGHT, 3),
        labels: &[
            label(5, 20, "PLANT", TEXT, Regular),
            label(-15, 35, "Leave", TEXT, Small),
            label(-15, 47, "transparent!", TEXT, Small),
        ],
    }),
    Element::Region(Region {
        name: "window",
        kind: RegionKind::Optional,
        shape: Shape::Rect(Rect::new(140, 20, 80, 60)),
        fill: None,
        outline: stroke(WINDOW_LINE, 2),
        labels: &[
            label(10, 25, "WINDOW", WINDOW_TEXT, Regular),
            label(-35, 40, "(optional - code", WINDOW_NOTE, Small),
            label(-35, 52, "will draw if empty)", WINDOW_NOTE, Small),
        ],
    }),
    Element::Region(Region {
        name: "shelf-1",
        kind: RegionKind::Guide,
        shape: Shape::Rect(Rect::new(20, 180, 320, 8)),
        fill: None,
        outline: stroke(SHELF_LINE, 1),
        labels: &[],
    }),
    Element::Region(Region {
        name: "shelf-2",
        kind: RegionKind::Guide,
        shape: Shape::Rect(Rect::new(20, 230, 320, 8)),
        fill: None,
        outline: stroke(SHELF_LINE, 1),
        labels: &[label(100, -15, "Shelves (for constructs)", SHELF_TEXT, Small)],
    }),
    Element::Region(Region {
        name: "shelf-3",
        kind: RegionKind::Guide,
        shape: Shape::Rect(Rect::new(20, 280, 320, 8)),
        fill: None,
        outline: stroke(SHELF_LINE, 1),
        labels: &[],
    }),
    Element::Region(Region {
        name: "workbench",
        kind: RegionKind::Optional,
        shape: Shape::Rect(Rect::new(90, 400, 180, 100)),
        fill: None,
        outline: stroke(BENCH_LINE, 2),
        labels: &[
            label(40, 45, "WORKBENCH", BENCH_TEXT, Regular),
            label(10, 60, "(draw or leave to code)", BENCH_NOTE, Small),
        ],
    }),
    Element::Region(Region {
        name: "floor",
        kind: RegionKind::Guide,
        shape: Shape::HRule { y: 540 },
        fill: None,
        outline: stroke(FLOOR_LINE, 3),
        labels: &[label(160, 10, "FLOOR LINE", FLOOR_TEXT, Small)],
    }),
    Element::Region(Region {
        name: "spawn",
        kind: RegionKind::Guide,
        shape: Shape::Rect(Rect::new(50, 555, 260, 30)),
        fill: None,
        outline: stroke(SPAWN_LINE, 1),
        labels: &[label(50, 10, "Pieces appear here", SPAWN_TEXT, Small)],
    }),
    Element::Region(Region {
        name: "legend",
        kind: RegionKind::Legend,
        shape: Shape::Rect(Rect::new(5, 580, 350, 55)),
        fill: Some(LEGEND_PANEL),
        outline: stroke(OUTLINE, 1),
        labels: &[label(5, 5, "LEGEND:", TEXT, Regular)],
    }),
    Element::Region(Region {
        name: "legend-draw",
        kind: RegionKind::Legend,
        shape: Shape::Rect(Rect::new(10, 602, 15, 10)),
        fill: Some(DRAW_AREA),
        outline: stroke(OUTLINE, 1),
        labels: &[label(20, -2, "= Draw your background here", TEXT, Small)],
    }),
    Element::Region(Region {
        name: "legend-transparent",
        kind: RegionKind::Legend,
        shape: Shape::Rect(Rect::new(10, 617, 15, 10)),
        fill: Some(TRANSPARENT_AREA),
        outline: stroke(HIGHLIGHT, 1),
        labels: &[label(20, -2, "= LEAVE TRANSPARENT (for animations!)", HIGHLIGHT, Small)],
    }),
];

/// The full template in drawing order.
pub fn template() -> &'static [Element] {
    TEMPLATE
}

pub fn regions() -> impl Iterator<Item = &'static Region> {
    TEMPLATE.iter().filter_map(|e| match e {
        Element::Region(r) => Some(r),
        Element::Grid(_) => None,
    })
}

pub fn region(name: &str) -> Option<&'static Region> {
    regions().find(|r| r.name == name)
}

pub fn regions_of_kind(kind: RegionKind) -> impl Iterator<Item = &'static Region> {
    regions().filter(move |r| r.kind == kind)
}

/// Expand the template into a display list for a canvas of `size`.
pub fn layout_template(size: CanvasSize) -> Vec<PaintCommand> {
    let mut cmds = Vec::new();
    for element in TEMPLATE {
        match element {
            Element::Grid(grid) => push_grid(&mut cmds, grid, size),
            Element::Region(region) => push_region(&mut cmds, region, size),
        }
    }
    cmds
}

fn push_grid(cmds: &mut Vec<PaintCommand>, grid: &Grid, size: CanvasSize) {
    let step = grid.spacing.max(1) as usize;
    for x in (0..size.width).step_by(step) {
        cmds.push(PaintCommand::SolidRect {
            x: x as i32,
            y: 0,
            width: 1,
            height: size.height + 1,
            rgba: grid.rgba,
        });
    }
    for y in (0..size.height).step_by(step) {
        cmds.push(PaintCommand::SolidRect {
            x: 0,
            y: y as i32,
            width: size.width + 1,
            height: 1,
            rgba: grid.rgba,
        });
    }
}

fn push_region(cmds: &mut Vec<PaintCommand>, region: &Region, size: CanvasSize) {
    match region.shape {
        Shape::Rect(r) => {
            if let Some(rgba) = region.fill {
                cmds.push(PaintCommand::SolidRect {
                    x: r.x,
                    y: r.y,
                    width: r.width + 1,
                    height: r.height + 1,
                    rgba,
                });
            }
            if let Some(outline) = region.outline {
                cmds.push(PaintCommand::StrokeRect {
                    x: r.x,
                    y: r.y,
                    width: r.width + 1,
                    height: r.height + 1,
                    stroke: outline.width,
                    rgba: outline.rgba,
                });
            }
        }
        Shape::HRule { y } => {
            if let Some(outline) = region.outline {
                let thickness = outline.width.max(1);
                cmds.push(PaintCommand::SolidRect {
                    x: 0,
                    y: y - (thickness / 2) as i32,
                    width: size.width + 1,
                    height: thickness,
                    rgba: outline.rgba,
                });
            }
        }
    }

    let (ox, oy) = region.origin();
    for l in region.labels {
        cmds.push(PaintCommand::Text {
            x: ox + l.dx,
            y: oy + l.dy,
            text: l.text.to_string(),
            size: l.size,
            rgba: l.rgba,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_regions_are_radio_and_plant() {
        let names: Vec<_> = regions_of_kind(RegionKind::Transparent).map(|r| r.name).collect();
        assert_eq!(names, vec!["radio", "plant"]);

        let radio = region("radio").and_then(Region::bounds).unwrap();
        assert_eq!(radio, Rect::new(50, 50, 60, 70));
        let plant = region("plant").and_then(Region::bounds).unwrap();
        assert_eq!(plant, Rect::new(280, 85, 40, 65));
    }

    #[test]
    fn legend_swatches_reuse_zone_fills() {
        assert_eq!(region("legend-draw").unwrap().fill, region("background").unwrap().fill);
        assert_eq!(
            region("legend-transparent").unwrap().fill,
            region("radio").unwrap().fill
        );
        assert_eq!(region("plant").unwrap().fill, Some(TRANSPARENT_AREA));
    }

    #[test]
    fn region_names_are_unique() {
        let mut names: Vec<_> = regions().map(|r| r.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let r = Rect::new(50, 50, 60, 70);
        assert_eq!(r.corners(), (50, 50, 110, 120));
        assert!(r.contains(110, 120));
        assert!(!r.contains(111, 120));
        assert!(!r.contains(49, 60));
    }

    #[test]
    fn layout_starts_with_border_and_grid() {
        let cmds = layout_template(CanvasSize::default());
        assert_eq!(
            cmds[0],
            PaintCommand::StrokeRect { x: 0, y: 0, width: 360, height: 640, stroke: 2, rgba: OUTLINE }
        );
        // 9 vertical + 16 horizontal grid lines
        let grid = cmds.iter().filter(|c| matches!(c, PaintCommand::SolidRect { rgba, .. } if *rgba == GRID)).count();
        assert_eq!(grid, 25);
    }

    #[test]
    fn radio_fill_then_outline_then_labels() {
        let cmds = layout_template(CanvasSize::default());
        let at = cmds
            .iter()
            .position(|c| matches!(c, PaintCommand::SolidRect { rgba, x: 50, .. } if *rgba == TRANSPARENT_AREA))
            .unwrap();
        assert_eq!(
            cmds[at],
            PaintCommand::SolidRect { x: 50, y: 50, width: 61, height: 71, rgba: TRANSPARENT_AREA }
        );
        assert!(matches!(cmds[at + 1], PaintCommand::StrokeRect { stroke: 3, rgba: HIGHLIGHT, .. }));
        match &cmds[at + 2] {
            PaintCommand::Text { x, y, text, .. } => {
                assert_eq!((*x, *y), (55, 65));
                assert_eq!(text, "RADIO");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn floor_rule_is_centred_on_its_row() {
        let cmds = layout_template(CanvasSize::default());
        assert!(cmds.contains(&PaintCommand::SolidRect {
            x: 0,
            y: 539,
            width: 361,
            height: 3,
            rgba: FLOOR_LINE,
        }));
    }

    #[test]
    fn labels_resolve_to_absolute_positions() {
        let cmds = layout_template(CanvasSize::default());
        let find = |needle: &str| {
            cmds.iter().find_map(|c| match c {
                PaintCommand::Text { x, y, text, .. } if text == needle => Some((*x, *y)),
                _ => None,
            })
        };
        assert_eq!(find("Workshop Background Template"), Some((100, 8)));
        assert_eq!(find("Shelves (for constructs)"), Some((120, 215)));
        assert_eq!(find("FLOOR LINE"), Some((160, 550)));
        assert_eq!(find("= LEAVE TRANSPARENT (for animations!)"), Some((30, 615)));
    }

    #[test]
    fn template_serializes_to_json() {
        let json = serde_json::to_value(template()).unwrap();
        let first = &json[0];
        assert_eq!(first["element"], "region");
        assert_eq!(first["name"], "border");
        assert_eq!(first["shape"]["type"], "rect");
        assert_eq!(json[1]["element"], "grid");
    }
}
