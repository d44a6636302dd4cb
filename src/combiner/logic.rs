use crate::device::{Device, DeviceType, Rank, MAX_STARS};
use crate::error::Result;
use crate::stabilizer::{Stabilizer, DEVICES_PER_COMBINATION, ROLL_MAX, ROLL_MIN};
use rand::Rng;

/// Applies one stabilizer to groups of four devices.
///
/// The combiner holds no random state; every call takes the generator
/// explicitly so simulations can be seeded.
#[derive(Debug, Clone, Copy)]
pub struct Combiner<'a> {
    stabilizer: &'a Stabilizer,
}

impl<'a> Combiner<'a> {
    pub fn new(stabilizer: &'a Stabilizer) -> Self {
        Self { stabilizer }
    }

    /// Combine four devices into a new one.
    ///
    /// Fails when the stabilizer has no table for the inputs' rank
    /// composition, or when the roll falls past the table's last threshold.
    pub fn combine<R: Rng>(
        &self,
        devices: &[Device; DEVICES_PER_COMBINATION],
        rng: &mut R,
    ) -> Result<Device> {
        let new_type = merged_type(devices, rng);
        let roll = roll(rng);
        self.resolve(devices, roll, new_type)
    }

    /// Deterministic half of [`Combiner::combine`]: the output for a known
    /// roll and output type.
    pub fn resolve(
        &self,
        devices: &[Device; DEVICES_PER_COMBINATION],
        roll: u32,
        new_type: DeviceType,
    ) -> Result<Device> {
        let probabilities = self.stabilizer.lookup(devices)?;
        let best = best_device(devices);
        let rolled_rank = probabilities.rank_for_roll(roll)?;
        let (rank, stars) = upgrade_outcome(best, rolled_rank);

        tracing::trace!(
            best = %best,
            roll,
            %rolled_rank,
            %rank,
            stars,
            "combined devices"
        );

        Ok(Device::new(rank, stars, new_type))
    }
}

/// Convenience wrapper around [`Combiner::combine`].
pub fn combine<R: Rng>(
    stabilizer: &Stabilizer,
    devices: &[Device; DEVICES_PER_COMBINATION],
    rng: &mut R,
) -> Result<Device> {
    Combiner::new(stabilizer).combine(devices, rng)
}

/// Highest device by (rank, stars). Ties may return any of the tied devices.
pub fn best_device(devices: &[Device; DEVICES_PER_COMBINATION]) -> Device {
    let mut best = devices[0];
    for device in &devices[1..] {
        if *device > best {
            best = *device;
        }
    }
    best
}

/// Output type: shared type when all inputs agree, otherwise uniform random.
// TODO: a 2-2 type split could pick between the two present types instead of all three.
pub fn merged_type<R: Rng>(devices: &[Device; DEVICES_PER_COMBINATION], rng: &mut R) -> DeviceType {
    let first = devices[0].device_type;
    if devices.iter().all(|d| d.device_type == first) {
        first
    } else {
        DeviceType::random(rng)
    }
}

/// One uniform roll in `ROLL_MIN..=ROLL_MAX`.
pub fn roll<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(ROLL_MIN..=ROLL_MAX)
}

/// Star/rank rule applied to the best input and the rolled rank.
///
/// Staying at or below the best input's rank adds one star to the best
/// input's count; reaching `MAX_STARS + 1` below `Rank::TOP` promotes to the
/// next rank with 0 stars. At the top rank the 5-star result is kept. A
/// rolled rank above the best input always yields 1 star.
pub fn upgrade_outcome(best: Device, rolled_rank: Rank) -> (Rank, u8) {
    if rolled_rank > best.rank {
        return (rolled_rank, 1);
    }

    let stars = best.stars + 1;
    if stars == MAX_STARS + 1 {
        if let Some(next) = rolled_rank.next() {
            return (next, 0);
        }
    }
    (rolled_rank, stars)
}
