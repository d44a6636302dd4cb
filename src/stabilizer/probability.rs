use crate::device::Rank;
use crate::error::{BlackBoxError, Result};

/// Lowest and highest value of a combination roll.
pub const ROLL_MIN: u32 = 1;
pub const ROLL_MAX: u32 = 100;

/// Output-rank distribution for one rank composition.
///
/// Built from per-rank weights and stored as cumulative thresholds in
/// ascending rank order. The weights are observed drop rates and do not
/// always sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probability {
    thresholds: [(Rank, u32); 4],
}

impl Probability {
    pub fn new(c: u32, b: u32, a: u32, s: u32) -> Self {
        Self {
            thresholds: [
                (Rank::C, c),
                (Rank::B, c + b),
                (Rank::A, c + b + a),
                (Rank::S, c + b + a + s),
            ],
        }
    }

    /// Table that resolves every roll to `rank`.
    pub fn always(rank: Rank) -> Self {
        let mut weights = [0; 4];
        weights[rank.index()] = ROLL_MAX;
        Self::from_weights(weights)
    }

    pub fn from_weights(weights: [u32; 4]) -> Self {
        Self::new(weights[0], weights[1], weights[2], weights[3])
    }

    /// Final cumulative threshold, i.e. the sum of all weights.
    pub fn total(&self) -> u32 {
        self.thresholds[3].1
    }

    /// Resolve a roll to the first rank whose cumulative threshold is at
    /// least `roll`.
    pub fn rank_for_roll(&self, roll: u32) -> Result<Rank> {
        self.thresholds
            .iter()
            .find(|&&(_, threshold)| roll <= threshold)
            .map(|&(rank, _)| rank)
            .ok_or(BlackBoxError::OutOfRange {
                roll,
                max: self.total(),
            })
    }
}
