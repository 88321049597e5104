//! Immutable in-memory servant catalog.
//!
//! The catalog is built once at startup from every servant in the database and shared
//! read-only between request handlers. Servants are partitioned by draw pool when the
//! catalog is built, so sampling a pool never rescans the full list.

use rand::{seq::IndexedRandom, Rng};

use crate::server::{
    error::draw::DrawError,
    model::{
        pool::{Band, Pool},
        servant::Servant,
    },
};

/// Snapshot of every servant, partitioned by draw pool.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    servants: Vec<Servant>,
    five_star: Vec<usize>,
    four_star: Vec<usize>,
    three_star_or_below: Vec<usize>,
    guaranteed: Vec<usize>,
}

impl Catalog {
    /// Builds a catalog from servants in load order.
    ///
    /// # Arguments
    /// - `servants` - Every servant record; order is preserved for listing
    ///
    /// # Returns
    /// - `Catalog` - Catalog with pool partitions precomputed
    pub fn new(servants: Vec<Servant>) -> Self {
        let mut five_star = Vec::new();
        let mut four_star = Vec::new();
        let mut three_star_or_below = Vec::new();
        let mut guaranteed = Vec::new();

        for (index, servant) in servants.iter().enumerate() {
            for pool in Pool::ALL {
                if !pool.admits(servant.rarity) {
                    continue;
                }
                match pool {
                    Pool::Band(Band::FiveStar) => five_star.push(index),
                    Pool::Band(Band::FourStar) => four_star.push(index),
                    Pool::Band(Band::ThreeStarOrBelow) => three_star_or_below.push(index),
                    Pool::Guaranteed => guaranteed.push(index),
                }
            }
        }

        Self {
            servants,
            five_star,
            four_star,
            three_star_or_below,
            guaranteed,
        }
    }

    /// All servants in load order.
    pub fn servants(&self) -> &[Servant] {
        &self.servants
    }

    pub fn len(&self) -> usize {
        self.servants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servants.is_empty()
    }

    /// Number of servants eligible for `pool`.
    pub fn pool_len(&self, pool: Pool) -> usize {
        self.partition(pool).len()
    }

    /// Fails with `CatalogExhausted` if `pool` holds no servants.
    pub fn ensure_available(&self, pool: Pool) -> Result<(), DrawError> {
        if self.partition(pool).is_empty() {
            return Err(DrawError::CatalogExhausted { pool });
        }
        Ok(())
    }

    /// Samples one servant uniformly from `pool`.
    ///
    /// This is the single filter/sample/empty-check primitive every draw goes through.
    ///
    /// # Arguments
    /// - `pool` - Partition of the catalog to sample from
    /// - `rng` - Random source
    ///
    /// # Returns
    /// - `Ok(&Servant)` - The sampled servant
    /// - `Err(DrawError::CatalogExhausted)` - The pool holds no servants
    pub fn sample<R: Rng + ?Sized>(
        &self,
        pool: Pool,
        rng: &mut R,
    ) -> Result<&Servant, DrawError> {
        let index = self
            .partition(pool)
            .choose(rng)
            .ok_or(DrawError::CatalogExhausted { pool })?;

        Ok(&self.servants[*index])
    }

    fn partition(&self, pool: Pool) -> &[usize] {
        match pool {
            Pool::Band(Band::FiveStar) => &self.five_star,
            Pool::Band(Band::FourStar) => &self.four_star,
            Pool::Band(Band::ThreeStarOrBelow) => &self.three_star_or_below,
            Pool::Guaranteed => &self.guaranteed,
        }
    }
}
