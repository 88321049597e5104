//! Draw bands and pools.
//!
//! A band is one of the three probability-weighted rarity groups a single roll selects
//! from. A pool is any partition of the catalog the draw engine samples: one of the bands
//! or the guaranteed subset used for the first slot of a multi roll.

use std::fmt;

/// Probability-weighted rarity group selected by a single roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Rarity 5.
    FiveStar,
    /// Rarity 4.
    FourStar,
    /// Rarity 3 and below.
    ThreeStarOrBelow,
}

impl Band {
    /// Whether a servant of `rarity` belongs to this band.
    ///
    /// Every rarity belongs to exactly one band.
    pub fn admits(self, rarity: i32) -> bool {
        match self {
            Band::FiveStar => rarity == 5,
            Band::FourStar => rarity == 4,
            Band::ThreeStarOrBelow => rarity <= 3,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::FiveStar => f.write_str("5★"),
            Band::FourStar => f.write_str("4★"),
            Band::ThreeStarOrBelow => f.write_str("≤3★"),
        }
    }
}

/// Minimum rarity of the guaranteed multi roll slot.
pub const GUARANTEED_MIN_RARITY: i32 = 4;

/// A sampled partition of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    Band(Band),
    /// Every servant of rarity 4 or above.
    Guaranteed,
}

impl Pool {
    pub const ALL: [Pool; 4] = [
        Pool::Band(Band::FiveStar),
        Pool::Band(Band::FourStar),
        Pool::Band(Band::ThreeStarOrBelow),
        Pool::Guaranteed,
    ];

    /// Whether a servant of `rarity` belongs to this pool.
    pub fn admits(self, rarity: i32) -> bool {
        match self {
            Pool::Band(band) => band.admits(rarity),
            Pool::Guaranteed => rarity >= GUARANTEED_MIN_RARITY,
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::Band(band) => band.fmt(f),
            Pool::Guaranteed => f.write_str("guaranteed ≥4★"),
        }
    }
}
