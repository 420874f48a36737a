/// A colour, expressed in RGB or greyscale colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new colour in the Gray space, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }

    /// The colour's components in the RGB space
    pub fn to_rgb(&self) -> (f32, f32, f32) {
        match *self {
            Colour::RGB { r, g, b } => (r, g, b),
            Colour::Grey { g } => (g, g, g),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::RGB {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// The fixed colour theme of the resume template
pub mod colours {
    use super::Colour;

    /// Dark slate fill behind the sidebar column
    pub const SIDEBAR: Colour = Colour::RGB {
        r: 38.0 / 255.0,
        g: 50.0 / 255.0,
        b: 56.0 / 255.0,
    };

    /// Slightly lighter slate band behind the name / title header
    pub const BAND: Colour = Colour::RGB {
        r: 55.0 / 255.0,
        g: 71.0 / 255.0,
        b: 79.0 / 255.0,
    };

    /// Teal accent used for section headings and timeline markers
    pub const ACCENT: Colour = Colour::RGB {
        r: 0.0,
        g: 150.0 / 255.0,
        b: 136.0 / 255.0,
    };

    /// Near-white ink for text drawn on the sidebar fill
    pub const SIDEBAR_INK: Colour = Colour::RGB {
        r: 236.0 / 255.0,
        g: 239.0 / 255.0,
        b: 241.0 / 255.0,
    };

    /// Body ink for the main column
    pub const INK: Colour = Colour::Grey { g: 0.13 };

    /// De-emphasized ink for locations and similar secondary lines
    pub const MUTED: Colour = Colour::Grey { g: 0.46 };

    /// Skill-bar track and photo-placeholder fill
    pub const TRACK: Colour = Colour::RGB {
        r: 84.0 / 255.0,
        g: 110.0 / 255.0,
        b: 122.0 / 255.0,
    };

    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
}
