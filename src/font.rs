/// One of the built-in Type1 Helvetica faces used by the resume template.
///
/// The template never embeds fonts: its line breaking is character-count
/// based, so no glyph metrics are required, and every PDF viewer ships the
/// standard Helvetica family. Each style maps to one `/F<n>` font resource
/// on the page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

impl FontStyle {
    /// Every style the template can reference, in resource-index order
    pub const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Oblique];

    /// The PDF base font name for this style
    pub fn base_font(&self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"Helvetica",
            FontStyle::Bold => b"Helvetica-Bold",
            FontStyle::Oblique => b"Helvetica-Oblique",
        }
    }

    /// The index of this style within the page's font resources
    pub fn resource_index(&self) -> usize {
        match self {
            FontStyle::Regular => 0,
            FontStyle::Bold => 1,
            FontStyle::Oblique => 2,
        }
    }

    /// The `/F<n>` resource name this style is registered under
    pub fn resource_name(&self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"F0",
            FontStyle::Bold => b"F1",
            FontStyle::Oblique => b"F2",
        }
    }
}
