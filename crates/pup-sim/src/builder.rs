//! Fluent builder for constructing a [`Yard`].

use pup_core::{Position, PupId, PupRng, SimConfig};

use crate::{Pup, SimError, SimResult, Yard};

/// Fluent builder for [`Yard`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                 |
/// |--------------------------|-------------------------|
/// | `.pups(n)`               | `1`                     |
/// | `.start_positions(v)`    | Every pup at the origin |
///
/// # Example
///
/// ```rust,ignore
/// let mut yard = YardBuilder::new(config)
///     .pups(8)
///     .build()?;
/// yard.run(&mut NoopObserver)?;
/// ```
pub struct YardBuilder {
    config:    SimConfig,
    count:     usize,
    positions: Option<Vec<Position>>,
}

impl YardBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, count: 1, positions: None }
    }

    /// Number of pups in the yard.
    pub fn pups(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Starting position for each pup (must be length `count`, every
    /// component finite).
    pub fn start_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, seed one controller per pup, initialize them all and
    /// return a ready-to-run [`Yard`].
    ///
    /// Pup `i` draws from `PupRng::new(config.seed, PupId(i))`, so a pup's
    /// trajectory depends only on the seed and its own id.
    pub fn build(self) -> SimResult<Yard> {
        self.config.validate()?;

        let positions = match self.positions {
            Some(p) => {
                if p.len() != self.count {
                    return Err(SimError::PupCountMismatch {
                        expected: self.count,
                        got:      p.len(),
                        what:     "start positions",
                    });
                }
                p
            }
            None => vec![Position::ORIGIN; self.count],
        };

        let pups = positions
            .into_iter()
            .enumerate()
            .map(|(i, start)| -> SimResult<Pup> {
                let id = PupId::try_from(i).map_err(|_| SimError::TooManyPups(self.count))?;
                let mut pup = Pup::new(PupRng::new(self.config.seed, id));
                pup.spawn_at(start)
                    .map_err(|source| SimError::Behavior { pup: id, source })?;
                pup.initialize();
                Ok(pup)
            })
            .collect::<SimResult<Vec<_>>>()?;

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        Ok(Yard {
            clock:  self.config.make_clock(),
            config: self.config,
            pups,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
