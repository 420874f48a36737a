//! Page sizes for the resume template.
//!
//! All sizes are provided in portrait orientation (width, height) where
//! width ≤ height. The template itself always renders on [`A4`]; [`LETTER`]
//! is provided for callers that post-process the layout onto North American
//! paper.

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// Convert a page size between portrait and landscape orientations
pub trait PageOrientation {
    /// Arrange the page size so that width ≤ height
    fn portrait(self) -> Self;
    /// Arrange the page size so that width ≥ height
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        (self.0.min(self.1), self.0.max(self.1))
    }

    fn landscape(self) -> Self {
        (self.0.max(self.1), self.0.min(self.1))
    }
}
