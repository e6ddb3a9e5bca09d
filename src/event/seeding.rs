//! Roster shuffling for fields without incoming ratings.

use rand::seq::SliceRandom;

/// Shuffles a roster before seeds are assigned by roster order.
///
/// Used for drop-in nights where nobody carries a rating: a shuffled
/// roster gives an arbitrary but fair round-1 seeding, and play sorts the
/// field from there. The core engine itself is deterministic and never
/// touches an RNG.
pub struct RosterShuffler {
    /// Random number generator
    rng: rand::rngs::ThreadRng,
}

impl RosterShuffler {
    /// Create a new roster shuffler
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }

    /// Shuffle the roster in place. Seed 1 is whoever lands first.
    pub fn shuffle(&mut self, roster: &mut [String]) {
        roster.shuffle(&mut self.rng);
    }
}

impl Default for RosterShuffler {
    fn default() -> Self {
        Self::new()
    }
}
