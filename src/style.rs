use crate::colour::{colours, Colour};
use crate::pagesize::{PageSize, A4};
use crate::photo::PhotoMask;
use crate::units::Pt;

/// Every fixed constant of the single-page resume template: page geometry,
/// font sizes, wrap thresholds, skill-bar metrics, and the colour theme.
///
/// The defaults reproduce the template's look; the struct exists so that
/// "photo masking style" and the various magic numbers are explicit options
/// instead of copy-pasted code paths.
#[derive(Debug, Clone)]
pub struct Style {
    pub page_size: PageSize,
    /// Bottom margin below which neither column should emit content
    pub margin: Pt,

    /// Fraction of the page width occupied by the sidebar column
    pub sidebar_frac: f32,
    /// Horizontal inset of sidebar content from the sidebar edges
    pub sidebar_pad: Pt,

    /// Gap between the page top and the photo slot
    pub photo_top: Pt,
    pub photo_mask: PhotoMask,

    pub name_size: Pt,
    pub title_size: Pt,
    pub heading_size: Pt,
    pub body_size: Pt,
    /// Extra space between wrapped body lines
    pub line_pad: Pt,
    /// Gap between the photo bottom and the name baseline
    pub name_drop: Pt,
    /// Gap between the name and title baselines
    pub name_advance: Pt,
    /// Padding of the header band around the name / title block
    pub band_pad: Pt,

    /// Wrap threshold (characters) for the narrow sidebar column
    pub sidebar_wrap: usize,
    /// Wrap threshold (characters) for the wide main column
    pub main_wrap: usize,

    pub bar_width: Pt,
    pub bar_height: Pt,
    /// Vertical step after each skill's bar
    pub skill_step: Pt,

    /// Radius of the timeline marker dots in the main column
    pub marker_radius: Pt,
    /// Gap between the sidebar edge and the main column text
    pub main_pad: Pt,
    pub entry_gap: Pt,
    pub section_gap: Pt,

    pub sidebar_fill: Colour,
    pub band_fill: Colour,
    pub accent: Colour,
    pub sidebar_ink: Colour,
    pub ink: Colour,
    pub muted: Colour,
    pub track: Colour,
    pub placeholder: Colour,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            page_size: A4,
            margin: Pt(24.0),

            sidebar_frac: 1.0 / 3.0,
            sidebar_pad: Pt(16.0),

            photo_top: Pt(24.0),
            photo_mask: PhotoMask::Circle,

            name_size: Pt(19.0),
            title_size: Pt(11.5),
            heading_size: Pt(13.0),
            body_size: Pt(9.5),
            line_pad: Pt(3.5),
            name_drop: Pt(30.0),
            name_advance: Pt(24.0),
            band_pad: Pt(10.0),

            sidebar_wrap: 26,
            main_wrap: 58,

            bar_width: Pt(150.0),
            bar_height: Pt(4.5),
            skill_step: Pt(18.0),

            marker_radius: Pt(3.0),
            main_pad: Pt(30.0),
            entry_gap: Pt(12.0),
            section_gap: Pt(22.0),

            sidebar_fill: colours::SIDEBAR,
            band_fill: colours::BAND,
            accent: colours::ACCENT,
            sidebar_ink: colours::SIDEBAR_INK,
            ink: colours::INK,
            muted: colours::MUTED,
            track: colours::TRACK,
            placeholder: colours::TRACK,
        }
    }
}

impl Style {
    /// Width of the sidebar column
    pub fn sidebar_width(&self) -> Pt {
        self.page_size.0 * self.sidebar_frac
    }

    /// Side length of the square photo slot
    pub fn photo_side(&self) -> Pt {
        self.sidebar_width() - self.sidebar_pad * 2.0
    }

    /// Pixel side length to decode photos at. Rendered at twice the slot's
    /// point size so the photo stays sharp on screen and in print.
    pub fn photo_px(&self) -> u32 {
        (self.photo_side().0 * 2.0).round() as u32
    }

    /// x-coordinate of the main column's text
    pub fn main_text_x(&self) -> Pt {
        self.sidebar_width() + self.main_pad
    }

    /// x-coordinate of the main column's timeline markers
    pub fn marker_x(&self) -> Pt {
        self.sidebar_width() + self.main_pad * 0.45
    }
}
