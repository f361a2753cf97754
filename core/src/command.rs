use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// One player action, addressed by grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal { x: Coord, y: Coord },
    ToggleFlag { x: Coord, y: Coord },
}

impl Command {
    pub const fn for_button(button: PointerButton, (x, y): Coord2) -> Self {
        match button {
            PointerButton::Primary => Self::Reveal { x, y },
            PointerButton::Secondary => Self::ToggleFlag { x, y },
        }
    }

    /// Translates a click at pixel offset `(px, py)`, `None` when it cannot name any cell.
    pub fn from_pointer(button: PointerButton, px: f64, py: f64, cell_size: u32) -> Option<Self> {
        pixel_to_cell(px, py, cell_size).map(|coords| Self::for_button(button, coords))
    }

    pub const fn coords(self) -> Coord2 {
        match self {
            Self::Reveal { x, y } | Self::ToggleFlag { x, y } => (x, y),
        }
    }
}
