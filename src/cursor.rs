use crate::units::Pt;
use log::warn;

/// The running vertical offset of one layout column.
///
/// Each column owns its own cursor; content is emitted top to bottom so the
/// offset only ever decreases. The template does not paginate: if a column
/// runs past the bottom margin the content simply draws off-page, and the
/// cursor logs one warning for the column when that first happens.
#[derive(Debug, Clone)]
pub struct Cursor {
    y: Pt,
    bottom: Pt,
    column: &'static str,
    overflowed: bool,
}

impl Cursor {
    pub fn new(top: Pt, bottom: Pt, column: &'static str) -> Cursor {
        Cursor {
            y: top,
            bottom,
            column,
            overflowed: false,
        }
    }

    /// The current baseline offset
    pub fn y(&self) -> Pt {
        self.y
    }

    /// Move the cursor down by `dy`
    pub fn advance(&mut self, dy: Pt) {
        self.y -= dy;
        if !self.overflowed && self.y < self.bottom {
            warn!(
                "{} column overflowed the bottom margin; content will draw off-page",
                self.column
            );
            self.overflowed = true;
        }
    }

    /// Whether this column has run past the bottom margin
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_monotonically_decreasing() {
        let mut cursor = Cursor::new(Pt(100.0), Pt(20.0), "test");
        cursor.advance(Pt(30.0));
        assert_eq!(cursor.y(), Pt(70.0));
        cursor.advance(Pt(30.0));
        assert_eq!(cursor.y(), Pt(40.0));
        assert!(!cursor.overflowed());
        cursor.advance(Pt(30.0));
        assert!(cursor.overflowed());
    }
}
