use std::fmt::{Display, Formatter};

/// One character of the input grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    /// `'C'`, a conductive wire cell.
    Conductor,
    /// `'.'`, nothing here.
    #[default]
    Empty,
    /// Any other printable character: part of an insulated metal bar.
    Metal(char),
}

impl Cell {
    /// Classify `display`, rejecting whitespace and control characters.
    pub fn from_char(display: char) -> Option<Self> {
        match display {
            'C' => Some(Self::Conductor),
            '.' => Some(Self::Empty),
            other if other.is_whitespace() || other.is_control() => None,
            other => Some(Self::Metal(other)),
        }
    }

    /// The character this cell was read from.
    pub fn display(&self) -> char {
        match self {
            Self::Conductor => 'C',
            Self::Empty => '.',
            Self::Metal(display) => *display,
        }
    }

    #[inline]
    pub fn is_conductor(&self) -> bool {
        matches!(self, Self::Conductor)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
