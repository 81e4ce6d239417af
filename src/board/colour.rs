//! Colours, the playing palette, and the colour-name lookup table.
//!
//! Leaves draw their colour uniformly from [`COLOUR_LIST`]. Goal descriptions
//! refer to colours by the names in this table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Returns the human-readable name of this colour, or an `rgb(..)`
    /// rendering for colours outside the lookup table.
    pub fn name(self) -> String {
        match colour_name(self) {
            Some(name) => name.to_string(),
            None => format!("rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

pub const BLACK: Colour = Colour::new(0, 0, 0);
pub const WHITE: Colour = Colour::new(255, 255, 255);
pub const PACIFIC_POINT: Colour = Colour::new(1, 128, 181);
pub const OLD_OLIVE: Colour = Colour::new(138, 151, 71);
pub const REAL_RED: Colour = Colour::new(199, 44, 58);
pub const MELON_MAMBO: Colour = Colour::new(234, 62, 112);
pub const DAFFODIL_DELIGHT: Colour = Colour::new(255, 211, 92);
pub const TEMPTING_TURQUOISE: Colour = Colour::new(75, 196, 213);

/// Colours a leaf can be generated with.
pub const COLOUR_LIST: [Colour; 4] = [PACIFIC_POINT, REAL_RED, OLD_OLIVE, DAFFODIL_DELIGHT];

/// Outline drawn around every leaf.
pub const FRAME_COLOUR: Colour = BLACK;
/// Outline drawn around the selected node.
pub const HIGHLIGHT_COLOUR: Colour = TEMPTING_TURQUOISE;

const COLOUR_NAMES: [(Colour, &str); 8] = [
    (BLACK, "black"),
    (WHITE, "white"),
    (PACIFIC_POINT, "Pacific Point"),
    (OLD_OLIVE, "Old Olive"),
    (REAL_RED, "Real Red"),
    (MELON_MAMBO, "Melon Mambo"),
    (DAFFODIL_DELIGHT, "Daffodil Delight"),
    (TEMPTING_TURQUOISE, "Tempting Turquoise"),
];

/// Looks up the name of a colour in the static table.
pub fn colour_name(colour: Colour) -> Option<&'static str> {
    COLOUR_NAMES
        .iter()
        .find(|(c, _)| *c == colour)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_named() {
        for c in COLOUR_LIST {
            assert!(colour_name(c).is_some(), "{:?} has no name", c);
        }
    }

    #[test]
    fn palette_colours_are_distinct() {
        for (i, a) in COLOUR_LIST.iter().enumerate() {
            for b in &COLOUR_LIST[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_colour_falls_back_to_rgb() {
        assert_eq!(colour_name(Colour::new(1, 2, 3)), None);
        assert_eq!(Colour::new(1, 2, 3).name(), "rgb(1, 2, 3)");
        assert_eq!(REAL_RED.to_string(), "Real Red");
    }
}
