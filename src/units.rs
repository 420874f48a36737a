use derive_more::{
    Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A measurement in PDF points (1/72 of an inch). All page geometry in the
/// crate is expressed in points with the origin at the bottom-left corner of
/// the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// The larger of the two measurements
    pub fn max(self, other: Pt) -> Pt {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    /// The smaller of the two measurements
    pub fn min(self, other: Pt) -> Pt {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}
