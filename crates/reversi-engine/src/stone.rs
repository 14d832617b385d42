use std::fmt;

/// Contents of a cell, also used as the color to act.
///
/// * `None` - No stone (an empty cell).
/// * `Light` - A light stone.
/// * `Dark` - A dark stone. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    None,
    Light,
    Dark,
}

impl Stone {
    /// Converts the stone to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Stone::None`
    /// * `'O'` for `Stone::Light`
    /// * `'X'` for `Stone::Dark`
    pub fn to_char(self) -> char {
        match self {
            Stone::None => '-',
            Stone::Light => 'O',
            Stone::Dark => 'X',
        }
    }

    /// Parses a cell character. `'-'` and `'.'` are both accepted as empty.
    pub fn from_char(c: char) -> Option<Stone> {
        match c {
            '-' | '.' => Some(Stone::None),
            'O' | 'o' => Some(Stone::Light),
            'X' | 'x' => Some(Stone::Dark),
            _ => None,
        }
    }

    /// Returns the opposite color. `Stone::None` maps to itself.
    pub fn opposite(self) -> Stone {
        match self {
            Stone::Light => Stone::Dark,
            Stone::Dark => Stone::Light,
            Stone::None => Stone::None,
        }
    }

    /// Returns `true` for `Light` and `Dark`.
    #[inline]
    pub fn is_color(self) -> bool {
        self != Stone::None
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::None => "none",
            Stone::Light => "light",
            Stone::Dark => "dark",
        };
        f.write_str(name)
    }
}
