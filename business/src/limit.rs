//! Display cap on the number of snapshot records considered by the table.

use std::fmt;

use crate::LimitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Limit {
    L10,
    #[default]
    L25,
    L50,
    L100,
    L250,
    L500,
    L1000,
    L2000,
}

impl Limit {
    /// Every selectable limit, ascending.
    pub const ALL: [Self; 8] = [
        Self::L10,
        Self::L25,
        Self::L50,
        Self::L100,
        Self::L250,
        Self::L500,
        Self::L1000,
        Self::L2000,
    ];

    #[inline]
    pub const fn value(self) -> usize {
        match self {
            Self::L10 => 10,
            Self::L25 => 25,
            Self::L50 => 50,
            Self::L100 => 100,
            Self::L250 => 250,
            Self::L500 => 500,
            Self::L1000 => 1000,
            Self::L2000 => 2000,
        }
    }
}

impl TryFrom<usize> for Limit {
    type Error = LimitError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|limit| limit.value() == value)
            .ok_or(LimitError::Unsupported(value))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
