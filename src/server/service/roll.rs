//! Draw engine for single and multi rolls.
//!
//! A single roll samples an integer in `1..=100`, maps it to a band through fixed
//! thresholds, and samples a servant uniformly from that band:
//!
//! | roll      | band     | rate |
//! |-----------|----------|------|
//! | 1         | 5★       | 1%   |
//! | 2..=4     | 4★       | 3%   |
//! | 5..=100   | ≤3★      | 96%  |
//!
//! A multi roll draws eleven servants. Slot 0 is sampled from every 4★-or-above servant,
//! slots 1 to 10 are independent single rolls with replacement.
//!
//! Every function takes the random source as a parameter. Handlers pass a thread-local
//! generator per call; tests pass a seeded `StdRng`.

use rand::Rng;

use crate::server::{
    error::draw::DrawError,
    model::{
        catalog::Catalog,
        pool::{Band, Pool},
        servant::Servant,
    },
};

/// Lowest value a roll can take.
pub const ROLL_MIN: u8 = 1;

/// Highest value a roll can take.
pub const ROLL_MAX: u8 = 100;

/// Highest roll that selects the 5★ band.
pub const FIVE_STAR_MAX_ROLL: u8 = 1;

/// Highest roll that selects the 4★ band.
pub const FOUR_STAR_MAX_ROLL: u8 = 4;

/// Number of servants produced by a multi roll.
pub const MULTI_ROLL_SIZE: usize = 11;

/// Maps a roll in `ROLL_MIN..=ROLL_MAX` to the band it selects.
pub fn band_for_roll(roll: u8) -> Band {
    debug_assert!((ROLL_MIN..=ROLL_MAX).contains(&roll));

    if roll <= FIVE_STAR_MAX_ROLL {
        Band::FiveStar
    } else if roll <= FOUR_STAR_MAX_ROLL {
        Band::FourStar
    } else {
        Band::ThreeStarOrBelow
    }
}

/// Service performing draws against a catalog.
pub struct RollService<'a> {
    catalog: &'a Catalog,
}

impl<'a> RollService<'a> {
    /// Creates a new RollService over `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Performs a single roll.
    ///
    /// # Arguments
    /// - `rng` - Random source used for both the roll and the servant pick
    ///
    /// # Returns
    /// - `Ok(Servant)` - Servant from the band selected by the roll
    /// - `Err(DrawError::CatalogExhausted)` - The selected band holds no servants
    pub fn single<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Servant, DrawError> {
        let roll = rng.random_range(ROLL_MIN..=ROLL_MAX);
        self.single_with_roll(roll, rng)
    }

    /// Completes a single roll whose value has already been sampled.
    ///
    /// # Arguments
    /// - `roll` - Roll value in `ROLL_MIN..=ROLL_MAX`
    /// - `rng` - Random source used to pick within the band
    ///
    /// # Returns
    /// - `Ok(Servant)` - Servant from the band selected by `roll`
    /// - `Err(DrawError::CatalogExhausted)` - The selected band holds no servants
    pub fn single_with_roll<R: Rng + ?Sized>(
        &self,
        roll: u8,
        rng: &mut R,
    ) -> Result<Servant, DrawError> {
        let band = band_for_roll(roll);
        let servant = self.catalog.sample(Pool::Band(band), rng)?;

        tracing::debug!(
            roll,
            %band,
            collection_no = servant.collection_no,
            "single roll"
        );

        Ok(servant.clone())
    }

    /// Performs a multi roll of `MULTI_ROLL_SIZE` servants.
    ///
    /// The guaranteed pool is checked once before any slot is drawn, so a catalog without
    /// 4★-or-above servants fails immediately.
    ///
    /// # Arguments
    /// - `rng` - Random source shared by every slot
    ///
    /// # Returns
    /// - `Ok(Vec<Servant>)` - Exactly `MULTI_ROLL_SIZE` servants, guaranteed slot first
    /// - `Err(DrawError::CatalogExhausted)` - The guaranteed pool or a rolled band is empty
    pub fn multi<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Servant>, DrawError> {
        self.catalog.ensure_available(Pool::Guaranteed)?;

        let mut rolls = Vec::with_capacity(MULTI_ROLL_SIZE);
        rolls.push(self.catalog.sample(Pool::Guaranteed, rng)?.clone());

        for _ in 1..MULTI_ROLL_SIZE {
            rolls.push(self.single(rng)?);
        }

        tracing::debug!(
            guaranteed = rolls[0].collection_no,
            five_stars = rolls.iter().filter(|s| s.rarity == 5).count(),
            "multi roll"
        );

        Ok(rolls)
    }
}
