use crate::colour::Colour;
use crate::font::FontStyle;
use crate::pagesize::PageSize;
use crate::photo::PhotoAsset;
use crate::rect::Rect;
use crate::units::Pt;

/// One primitive drawing instruction in page coordinates (origin at the
/// bottom-left corner of the page).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: Pt,
        y: Pt,
        style: FontStyle,
        size: Pt,
        colour: Colour,
        text: String,
    },
    Rect {
        rect: Rect,
        colour: Colour,
    },
    Circle {
        cx: Pt,
        cy: Pt,
        r: Pt,
        colour: Colour,
    },
    /// Place the layout's photo asset into `rect`. At most one per layout.
    Image {
        rect: Rect,
    },
}

/// The layout engine's output artifact: the ordered draw list, the page it
/// was laid out for, and the photo asset that a [`DrawOp::Image`] op refers
/// to.
pub struct Layout {
    pub page_size: PageSize,
    pub ops: Vec<DrawOp>,
    pub photo: Option<PhotoAsset>,
}
