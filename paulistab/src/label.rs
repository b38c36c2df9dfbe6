use derive_more::{Display, FromStr};

/// Single-qubit Pauli letter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Display, FromStr, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PauliLabel {
    I,
    X,
    Y,
    Z,
}

impl PauliLabel {
    #[must_use]
    pub fn from_bits(x_bit: bool, z_bit: bool) -> Self {
        match (x_bit, z_bit) {
            (false, false) => PauliLabel::I,
            (true, false) => PauliLabel::X,
            (true, true) => PauliLabel::Y,
            (false, true) => PauliLabel::Z,
        }
    }

    #[must_use]
    pub fn has_x(self) -> bool {
        matches!(self, PauliLabel::X | PauliLabel::Y)
    }

    #[must_use]
    pub fn has_z(self) -> bool {
        matches!(self, PauliLabel::Z | PauliLabel::Y)
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == PauliLabel::I
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            PauliLabel::I => 'I',
            PauliLabel::X => 'X',
            PauliLabel::Y => 'Y',
            PauliLabel::Z => 'Z',
        }
    }
}

impl TryFrom<char> for PauliLabel {
    type Error = char;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        match character {
            'I' | 'i' | '_' => Ok(PauliLabel::I),
            'X' | 'x' => Ok(PauliLabel::X),
            'Y' | 'y' => Ok(PauliLabel::Y),
            'Z' | 'z' => Ok(PauliLabel::Z),
            other => Err(other),
        }
    }
}
