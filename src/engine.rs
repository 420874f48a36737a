use crate::colour::Colour;
use crate::cursor::Cursor;
use crate::font::FontStyle;
use crate::linebreak::{CharWrap, LineBreaker};
use crate::ops::{DrawOp, Layout};
use crate::photo::PhotoAsset;
use crate::record::ResumeRecord;
use crate::rect::Rect;
use crate::style::Style;
use crate::units::Pt;
use crate::Error;
use log::{debug, warn};

/// The fixed reference points of the template, derived once per render from
/// the [`Style`]: the photo slot, the name / title baselines, the header
/// band behind them, and where the main column starts below the band.
struct Frame {
    sidebar_w: Pt,
    photo_rect: Rect,
    name_y: Pt,
    title_y: Pt,
    band: Rect,
    main_top: Pt,
}

impl Frame {
    fn of(style: &Style) -> Frame {
        let (page_w, page_h) = style.page_size;
        let sidebar_w = style.sidebar_width();
        let side = style.photo_side();
        let photo_rect = Rect::from_xywh(
            style.sidebar_pad,
            page_h - style.photo_top - side,
            side,
            side,
        );
        let name_y = photo_rect.y1 - style.name_drop;
        let title_y = name_y - style.name_advance;
        let band = Rect::new(
            Pt::ZERO,
            title_y - style.band_pad,
            page_w,
            name_y + style.name_size + style.band_pad * 0.6,
        );
        let main_top = band.y1 - style.section_gap;
        Frame {
            sidebar_w,
            photo_rect,
            name_y,
            title_y,
            band,
            main_top,
        }
    }
}

/// The resume layout engine.
///
/// `render` is a pure function of the record, the photo, and the style:
/// identical input always produces an identical draw list. The engine holds
/// no per-request state; one instance can serve any number of renders.
pub struct Engine {
    style: Style,
    breaker: Box<dyn LineBreaker>,
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new(Style::default())
    }
}

impl Engine {
    pub fn new(style: Style) -> Engine {
        Engine {
            style,
            breaker: Box::new(CharWrap),
        }
    }

    /// Use a custom line-breaking policy in place of the default
    /// character-count wrap
    pub fn with_line_breaker(style: Style, breaker: Box<dyn LineBreaker>) -> Engine {
        Engine { style, breaker }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Render from raw upload bytes. Any photo failure, whether an
    /// unsupported format or corrupt data, degrades to the placeholder path
    /// with a warning; photo problems never fail the render.
    pub fn render_from_parts(
        &self,
        record: &ResumeRecord,
        photo_bytes: Option<&[u8]>,
    ) -> Result<Layout, Error> {
        let photo = photo_bytes.and_then(|bytes| {
            match PhotoAsset::decode(bytes, self.style.photo_px(), self.style.photo_mask) {
                Ok(asset) => Some(asset),
                Err(err) => {
                    warn!("photo unusable, rendering the placeholder instead: {err}");
                    None
                }
            }
        });
        self.render(record, photo)
    }

    /// Lay the record out into an ordered draw list. Validation runs first;
    /// a missing required field aborts before any op is emitted.
    pub fn render(
        &self,
        record: &ResumeRecord,
        photo: Option<PhotoAsset>,
    ) -> Result<Layout, Error> {
        record.validate()?;

        let frame = Frame::of(&self.style);
        let mut ops = Vec::new();
        self.sidebar(record, photo.is_some(), &frame, &mut ops);
        self.main_column(record, &frame, &mut ops);
        debug!("laid out {} draw ops", ops.len());

        Ok(Layout {
            page_size: self.style.page_size,
            ops,
            photo,
        })
    }

    /// Left third of the page: background fills, photo or placeholder,
    /// name / title, about text, contact lines, and skill bars.
    fn sidebar(&self, record: &ResumeRecord, has_photo: bool, frame: &Frame, ops: &mut Vec<DrawOp>) {
        let s = &self.style;
        let (_, page_h) = s.page_size;
        let x = s.sidebar_pad;

        ops.push(DrawOp::Rect {
            rect: Rect::from_xywh(Pt::ZERO, Pt::ZERO, frame.sidebar_w, page_h),
            colour: s.sidebar_fill,
        });
        ops.push(DrawOp::Rect {
            rect: frame.band,
            colour: s.band_fill,
        });

        if has_photo {
            ops.push(DrawOp::Image {
                rect: frame.photo_rect,
            });
        } else {
            let r = frame.photo_rect.width() / 2.0;
            ops.push(DrawOp::Circle {
                cx: frame.photo_rect.x1 + r,
                cy: frame.photo_rect.y1 + r,
                r,
                colour: s.placeholder,
            });
        }

        ops.push(DrawOp::Text {
            x,
            y: frame.name_y,
            style: FontStyle::Bold,
            size: s.name_size,
            colour: s.sidebar_ink,
            text: record.name.clone(),
        });
        ops.push(DrawOp::Text {
            x,
            y: frame.title_y,
            style: FontStyle::Regular,
            size: s.title_size,
            colour: s.sidebar_ink,
            text: record.title.clone(),
        });

        let mut cur = Cursor::new(frame.title_y - s.section_gap, s.margin, "sidebar");

        self.paragraph(
            ops,
            &mut cur,
            x,
            &record.about,
            FontStyle::Regular,
            s.sidebar_ink,
            s.sidebar_wrap,
        );
        cur.advance(s.section_gap);

        self.heading(ops, &mut cur, x, "Contact");
        for field in [&record.phone, &record.email, &record.address] {
            self.paragraph(
                ops,
                &mut cur,
                x,
                field,
                FontStyle::Regular,
                s.sidebar_ink,
                s.sidebar_wrap,
            );
        }
        cur.advance(s.section_gap);

        self.heading(ops, &mut cur, x, "Expertise");
        for skill in &record.skills {
            self.paragraph(
                ops,
                &mut cur,
                x,
                &skill.name,
                FontStyle::Regular,
                s.sidebar_ink,
                s.sidebar_wrap,
            );
            let level = skill.level.min(100) as f32 / 100.0;
            ops.push(DrawOp::Rect {
                rect: Rect::from_xywh(x, cur.y(), s.bar_width, s.bar_height),
                colour: s.track,
            });
            ops.push(DrawOp::Rect {
                rect: Rect::from_xywh(x, cur.y(), s.bar_width * level, s.bar_height),
                colour: s.accent,
            });
            cur.advance(s.skill_step);
        }
    }

    /// Right two thirds of the page: the education and experience timelines,
    /// starting below the header band.
    fn main_column(&self, record: &ResumeRecord, frame: &Frame, ops: &mut Vec<DrawOp>) {
        let s = &self.style;
        let x = s.main_text_x();
        let mut cur = Cursor::new(frame.main_top, s.margin, "main");

        self.heading(ops, &mut cur, x, "Education");
        for entry in &record.education {
            self.marker(ops, &cur);
            self.paragraph(
                ops,
                &mut cur,
                x,
                &entry.years,
                FontStyle::Bold,
                s.ink,
                s.main_wrap,
            );
            self.paragraph(
                ops,
                &mut cur,
                x,
                &entry.school,
                FontStyle::Regular,
                s.ink,
                s.main_wrap,
            );
            self.paragraph(
                ops,
                &mut cur,
                x,
                &entry.location,
                FontStyle::Oblique,
                s.muted,
                s.main_wrap,
            );
            cur.advance(s.entry_gap);
        }
        cur.advance(s.section_gap);

        self.heading(ops, &mut cur, x, "Experience");
        for entry in &record.experience {
            self.marker(ops, &cur);
            self.paragraph(
                ops,
                &mut cur,
                x,
                &entry.years,
                FontStyle::Bold,
                s.ink,
                s.main_wrap,
            );
            self.paragraph(
                ops,
                &mut cur,
                x,
                &entry.position,
                FontStyle::Regular,
                s.ink,
                s.main_wrap,
            );
            self.paragraph(
                ops,
                &mut cur,
                x,
                &entry.description,
                FontStyle::Regular,
                s.ink,
                s.main_wrap,
            );
            cur.advance(s.entry_gap);
        }
    }

    /// Emit `text` as wrapped body lines at `x`, advancing the cursor by
    /// `body_size + line_pad` per line. Blank text emits nothing.
    fn paragraph(
        &self,
        ops: &mut Vec<DrawOp>,
        cur: &mut Cursor,
        x: Pt,
        text: &str,
        style: FontStyle,
        colour: Colour,
        wrap: usize,
    ) {
        let size = self.style.body_size;
        for line in self.breaker.break_lines(text, wrap) {
            ops.push(DrawOp::Text {
                x,
                y: cur.y(),
                style,
                size,
                colour,
                text: line,
            });
            cur.advance(size + self.style.line_pad);
        }
    }

    fn heading(&self, ops: &mut Vec<DrawOp>, cur: &mut Cursor, x: Pt, text: &str) {
        let s = &self.style;
        ops.push(DrawOp::Text {
            x,
            y: cur.y(),
            style: FontStyle::Bold,
            size: s.heading_size,
            colour: s.accent,
            text: text.into(),
        });
        cur.advance(s.heading_size + s.line_pad * 2.0);
    }

    /// Timeline dot to the left of the current entry's first line
    fn marker(&self, ops: &mut Vec<DrawOp>, cur: &Cursor) {
        let s = &self.style;
        ops.push(DrawOp::Circle {
            cx: s.marker_x(),
            cy: cur.y() + s.marker_radius,
            r: s.marker_radius,
            colour: s.accent,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EducationEntry, Skill};

    fn jane_doe() -> ResumeRecord {
        ResumeRecord {
            name: "Jane Doe".into(),
            title: "Engineer".into(),
            about: "Loves systems".into(),
            phone: "555-1234".into(),
            email: "jane@x.com".into(),
            address: "1 Main St".into(),
            education: vec![EducationEntry {
                years: "2018-2020".into(),
                school: "State U".into(),
                location: "City".into(),
            }],
            experience: vec![],
            skills: vec![Skill {
                name: "Go".into(),
                level: 80,
            }],
        }
    }

    fn texts(layout: &Layout) -> Vec<&str> {
        layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn bar_rects(layout: &Layout) -> Vec<Rect> {
        // skip the sidebar fill and header band, which always come first
        layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .skip(2)
            .collect()
    }

    #[test]
    fn empty_sections_still_render_their_headings() {
        let record = ResumeRecord {
            name: "Jane Doe".into(),
            title: "Engineer".into(),
            ..Default::default()
        };
        let layout = Engine::default()
            .render(&record, None)
            .expect("render succeeds");

        let texts = texts(&layout);
        assert!(texts.contains(&"Education"));
        assert!(texts.contains(&"Experience"));
        assert!(texts.contains(&"Expertise"));
        assert!(bar_rects(&layout).is_empty(), "no skill bars expected");
        // headings, name, and title only: no entry content
        assert_eq!(
            texts,
            vec!["Jane Doe", "Engineer", "Contact", "Expertise", "Education", "Experience"]
        );
    }

    #[test]
    fn missing_name_aborts_before_any_drawing() {
        let record = ResumeRecord {
            title: "Engineer".into(),
            ..Default::default()
        };
        assert!(matches!(
            Engine::default().render(&record, None),
            Err(Error::MissingField("name"))
        ));
    }

    #[test]
    fn corrupt_photo_falls_back_to_the_placeholder() {
        let layout = Engine::default()
            .render_from_parts(&jane_doe(), Some(b"not an image at all"))
            .expect("photo failure must not fail the render");

        assert!(layout.photo.is_none());
        assert!(!layout
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Image { .. })));
        assert!(layout
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Circle { .. })));
    }

    #[test]
    fn valid_photo_fills_the_fixed_slot() {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            90,
            40,
            image::Rgba([10, 20, 30, 255]),
        ));
        let mut png = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageOutputFormat::Png,
        )
        .expect("png encodes");

        let engine = Engine::default();
        let layout = engine
            .render_from_parts(&jane_doe(), Some(&png))
            .expect("render succeeds");

        let slot = engine.style().photo_side();
        let image_rect = layout
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Image { rect } => Some(*rect),
                _ => None,
            })
            .expect("image op present");
        assert!((image_rect.width().0 - slot.0).abs() < 1e-3);
        assert!((image_rect.height().0 - slot.0).abs() < 1e-3);
        assert_eq!(
            layout.photo.as_ref().map(|p| p.side()),
            Some(engine.style().photo_px())
        );
    }

    #[test]
    fn skill_bar_width_scales_linearly_with_level() {
        let engine = Engine::default();
        let bar_width = engine.style().bar_width.0;

        for (level, expected) in [(0u8, 0.0f32), (50, bar_width / 2.0), (100, bar_width)] {
            let record = ResumeRecord {
                skills: vec![Skill {
                    name: "Go".into(),
                    level,
                }],
                ..jane_doe()
            };
            let layout = engine.render(&record, None).expect("render succeeds");
            let bars = bar_rects(&layout);
            assert_eq!(bars.len(), 2, "one track and one fill expected");
            assert!((bars[0].width().0 - bar_width).abs() < 1e-3);
            assert!(
                (bars[1].width().0 - expected).abs() < 1e-3,
                "level {level} should fill {expected} of {bar_width}"
            );
        }
    }

    #[test]
    fn identical_input_renders_identical_ops() {
        let engine = Engine::default();
        let a = engine.render(&jane_doe(), None).expect("render succeeds");
        let b = engine.render(&jane_doe(), None).expect("render succeeds");
        assert_eq!(a.ops, b.ops);
    }

    #[test]
    fn jane_doe_end_to_end() {
        let engine = Engine::default();
        let layout = engine
            .render_from_parts(&jane_doe(), None)
            .expect("render succeeds");

        // placeholder circle first, then the timeline has no experience dots
        let circles: Vec<_> = layout
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .collect();
        assert_eq!(circles.len(), 2, "placeholder plus one education marker");

        let texts = texts(&layout);
        assert!(texts.contains(&"Jane Doe"));
        assert!(texts.contains(&"State U"));
        assert!(texts.contains(&"Expertise"));

        let education_at = texts.iter().position(|t| *t == "Education").unwrap();
        let experience_at = texts.iter().position(|t| *t == "Experience").unwrap();
        assert!(texts[education_at + 1..experience_at].contains(&"2018-2020"));
        assert_eq!(
            experience_at,
            texts.len() - 1,
            "nothing renders beneath the empty Experience section"
        );

        let bars = bar_rects(&layout);
        assert_eq!(bars.len(), 2);
        assert!((bars[1].width().0 - engine.style().bar_width.0 * 0.8).abs() < 1e-3);
    }
}
