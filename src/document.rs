use crate::font::FontStyle;
use crate::info::Info;
use crate::ops::{DrawOp, Layout};
use crate::photo::PhotoAsset;
use crate::refs::{ObjectReferences, RefType};
use crate::Error;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Rect, Ref};
use std::io::Write;

/// Writes a [`Layout`] out as a single-page PDF.
///
/// The writer registers the three built-in Helvetica faces as page font
/// resources, embeds the photo asset (if any) as a FlateDecode RGB image
/// XObject with a DeviceGray soft mask for its alpha channel, and renders
/// the draw list into one content stream. The entire document is rendered in
/// memory before being written to the output.
#[derive(Default)]
pub struct Document {
    pub info: Option<Info>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    pub fn with_info(info: Info) -> Document {
        Document { info: Some(info) }
    }

    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Write the document to the writer
    pub fn write<W: Write>(&self, layout: &Layout, mut w: W) -> Result<(), Error> {
        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let page_id = refs.gen(RefType::Page);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        writer.pages(page_tree_id).count(1).kids([page_id]);

        let font_ids: Vec<(FontStyle, Ref)> = FontStyle::ALL
            .iter()
            .map(|style| (*style, refs.gen(RefType::Font(style.resource_index()))))
            .collect();
        for (style, id) in font_ids.iter() {
            writer.type1_font(*id).base_font(Name(style.base_font()));
        }

        let photo_id = match &layout.photo {
            Some(photo) => Some(write_photo(&mut refs, photo, &mut writer)),
            None => None,
        };

        let (page_w, page_h) = layout.page_size;
        let mut page = writer.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, page_w.0, page_h.0));
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (style, id) in font_ids.iter() {
            resource_fonts.pair(Name(style.resource_name()), *id);
        }
        resource_fonts.finish();
        if let Some(photo_id) = photo_id {
            let mut resource_xobjects = resources.x_objects();
            resource_xobjects.pair(Name(b"I0"), photo_id);
            resource_xobjects.finish();
        }
        resources.finish();

        let content_id = refs.gen(RefType::Content);
        page.contents(content_id);
        page.finish();

        let content = render_ops(&layout.ops)?;
        writer.stream(content_id, content.as_slice());

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

/// Embed the photo as an RGB image XObject, with a soft mask carrying the
/// alpha channel when the asset has one (circular masking, or transparency
/// in the source image)
fn write_photo(refs: &mut ObjectReferences, photo: &PhotoAsset, writer: &mut Pdf) -> Ref {
    let id = refs.gen(RefType::Photo);
    let level = CompressionLevel::DefaultLevel as u8;
    let side = photo.side() as i32;

    let bytes = compress_to_vec_zlib(&photo.rgb_bytes(), level);
    let mask = photo
        .alpha_bytes()
        .map(|alphas| compress_to_vec_zlib(&alphas, level));
    let mask_id = mask.as_ref().map(|_| refs.gen(RefType::PhotoMask));

    let mut image = writer.image_xobject(id, bytes.as_slice());
    image.filter(Filter::FlateDecode);
    image.width(side);
    image.height(side);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    if let Some(mask_id) = mask_id {
        image.s_mask(mask_id);
    }
    image.finish();

    if let (Some(mask_id), Some(mask)) = (mask_id, mask) {
        let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
        s_mask.filter(Filter::FlateDecode);
        s_mask.width(side);
        s_mask.height(side);
        s_mask.color_space().device_gray();
        s_mask.bits_per_component(8);
    }

    id
}

/// Renders the draw list to a PDF content stream
#[allow(clippy::write_with_newline)]
fn render_ops(ops: &[DrawOp]) -> Result<Vec<u8>, std::io::Error> {
    // cubic Bezier circle approximation constant
    const KAPPA: f32 = 0.551_915;

    let mut content: Vec<u8> = Vec::default();

    for op in ops.iter() {
        match op {
            DrawOp::Rect { rect, colour } => {
                let (r, g, b) = colour.to_rgb();
                write!(&mut content, "q\n")?;
                write!(&mut content, "{} {} {} rg\n", r, g, b)?;
                write!(
                    &mut content,
                    "{} {} {} {} re\nf\n",
                    rect.x1,
                    rect.y1,
                    rect.width(),
                    rect.height()
                )?;
                write!(&mut content, "Q\n")?;
            }
            DrawOp::Circle { cx, cy, r, colour } => {
                let (cr, cg, cb) = colour.to_rgb();
                let (cx, cy, r) = (cx.0, cy.0, r.0);
                let k = KAPPA * r;
                write!(&mut content, "q\n")?;
                write!(&mut content, "{} {} {} rg\n", cr, cg, cb)?;
                write!(&mut content, "{} {} m\n", cx + r, cy)?;
                write!(
                    &mut content,
                    "{} {} {} {} {} {} c\n",
                    cx + r,
                    cy + k,
                    cx + k,
                    cy + r,
                    cx,
                    cy + r
                )?;
                write!(
                    &mut content,
                    "{} {} {} {} {} {} c\n",
                    cx - k,
                    cy + r,
                    cx - r,
                    cy + k,
                    cx - r,
                    cy
                )?;
                write!(
                    &mut content,
                    "{} {} {} {} {} {} c\n",
                    cx - r,
                    cy - k,
                    cx - k,
                    cy - r,
                    cx,
                    cy - r
                )?;
                write!(
                    &mut content,
                    "{} {} {} {} {} {} c\n",
                    cx + k,
                    cy - r,
                    cx + r,
                    cy - k,
                    cx + r,
                    cy
                )?;
                write!(&mut content, "f\nQ\n")?;
            }
            DrawOp::Text {
                x,
                y,
                style,
                size,
                colour,
                text,
            } => {
                let (r, g, b) = colour.to_rgb();
                write!(&mut content, "q\nBT\n")?;
                write!(
                    &mut content,
                    "/F{} {} Tf\n",
                    style.resource_index(),
                    size
                )?;
                write!(&mut content, "{} {} {} rg\n", r, g, b)?;
                write!(&mut content, "{} {} Td\n", x, y)?;
                write!(&mut content, "({}) Tj\n", escape_text(text))?;
                write!(&mut content, "ET\nQ\n")?;
            }
            DrawOp::Image { rect } => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    rect.width(),
                    rect.height(),
                    rect.x1,
                    rect.y1
                )?;
                write!(&mut content, "/I0 Do\n")?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

/// Escape a string for a PDF literal string with the built-in fonts'
/// single-byte encoding. Latin-1 characters are written as octal escapes;
/// anything beyond it is replaced, since the built-in Helvetica faces can't
/// represent it anyway.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '\\' => escaped.push_str("\\\\"),
            ' '..='~' => escaped.push(ch),
            _ => {
                let code = ch as u32;
                if code <= 0xFF {
                    escaped.push_str(&format!("\\{:03o}", code));
                } else {
                    escaped.push('?');
                }
            }
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_pdf_string_delimiters() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a (b) c"), "a \\(b\\) c");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn escapes_latin1_and_replaces_the_rest() {
        assert_eq!(escape_text("café"), "caf\\351");
        assert_eq!(escape_text("日本"), "??");
    }
}
