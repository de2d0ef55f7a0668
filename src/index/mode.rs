use std::fmt;

/// H3 index modes.
///
/// Only the cell mode is implemented by this crate; the other values are
/// reserved by the bit layout (mode 2 is assigned to unidirectional edges)
/// but have no corresponding index type here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u8)]
#[non_exhaustive]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
pub enum IndexMode {
    /// An H3 Cell (Hexagon/Pentagon) index.
    Cell = 1,
}

impl From<IndexMode> for u8 {
    fn from(value: IndexMode) -> Self {
        value as Self
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Self::Cell => "Cell",
            }
        )
    }
}
