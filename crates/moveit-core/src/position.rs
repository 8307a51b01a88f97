//! Symbolic position tokens (`NE`, `C`, `BSW`, `O`, ...).

use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Horizontal half selected by a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Horizontal {
    /// Left half.
    West,
    /// Right half.
    East,
}

/// Vertical half selected by a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertical {
    /// Top half.
    North,
    /// Bottom half.
    South,
}

/// A parsed position token. Parsing never fails: anything unrecognised
/// becomes [`Position::Unknown`], which placement treats as the full head and
/// focus treats as "no match".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// `N S E W NE NW SE SW`; at least one component is set.
    Compass {
        vertical: Option<Vertical>,
        horizontal: Option<Horizontal>,
    },
    /// `C`
    Center,
    /// `BNE BNW BSE BSW`: a large window anchored to a corner (placement only).
    Big {
        vertical: Vertical,
        horizontal: Horizontal,
    },
    /// `O`: the next monitor (focus only).
    OtherHead,
    /// Anything else, preserved for diagnostics.
    Unknown(String),
}

impl Position {
    /// Parse a token, case-insensitively.
    pub fn parse(token: &str) -> Self {
        let upper = token.trim().to_ascii_uppercase();
        match upper.as_str() {
            "C" => Self::Center,
            "O" => Self::OtherHead,
            "BNE" | "BNW" | "BSE" | "BSW" => {
                let b = upper.as_bytes();
                Self::Big {
                    vertical: if b[1] == b'S' {
                        Vertical::South
                    } else {
                        Vertical::North
                    },
                    horizontal: if b[2] == b'E' {
                        Horizontal::East
                    } else {
                        Horizontal::West
                    },
                }
            }
            "N" | "S" | "E" | "W" | "NE" | "NW" | "SE" | "SW" => Self::Compass {
                vertical: if upper.contains('N') {
                    Some(Vertical::North)
                } else if upper.contains('S') {
                    Some(Vertical::South)
                } else {
                    None
                },
                horizontal: if upper.contains('W') {
                    Some(Horizontal::West)
                } else if upper.contains('E') {
                    Some(Horizontal::East)
                } else {
                    None
                },
            },
            _ => Self::Unknown(token.to_string()),
        }
    }
}

impl FromStr for Position {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let v = |v: &Vertical| match v {
            Vertical::North => "N",
            Vertical::South => "S",
        };
        let h = |h: &Horizontal| match h {
            Horizontal::West => "W",
            Horizontal::East => "E",
        };
        match self {
            Self::Compass {
                vertical,
                horizontal,
            } => write!(
                f,
                "{}{}",
                vertical.as_ref().map_or("", v),
                horizontal.as_ref().map_or("", h)
            ),
            Self::Center => write!(f, "C"),
            Self::Big {
                vertical,
                horizontal,
            } => write!(f, "B{}{}", v(vertical), h(horizontal)),
            Self::OtherHead => write!(f, "O"),
            Self::Unknown(s) => write!(f, "{s}"),
        }
    }
}
