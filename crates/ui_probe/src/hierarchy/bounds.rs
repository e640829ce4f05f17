//! Bounding box parsing for `bounds="[x1,y1][x2,y2]"` attributes

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOUNDS_RE: Regex =
        Regex::new(r"^\[(-?\d+),(-?\d+)\]\[(-?\d+),(-?\d+)\]$").expect("valid bounds pattern");
}

/// On-screen rectangle of a UI node, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Bounds {
    /// Parse a bounds attribute. Anything but four integers in the
    /// `[x1,y1][x2,y2]` shape yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = BOUNDS_RE.captures(raw.trim())?;
        let coord = |i: usize| caps.get(i)?.as_str().parse::<i32>().ok();
        Some(Self {
            x1: coord(1)?,
            y1: coord(2)?,
            x2: coord(3)?,
            y2: coord(4)?,
        })
    }

    /// Midpoint of the rectangle, rounded toward negative infinity
    pub fn center(&self) -> (i32, i32) {
        let cx = (i64::from(self.x1) + i64::from(self.x2)).div_euclid(2);
        let cy = (i64::from(self.y1) + i64::from(self.y2)).div_euclid(2);
        // The midpoint of two i32 values always fits in i32
        (cx as i32, cy as i32)
    }
}
