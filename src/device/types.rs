use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Highest star count a device normally carries. A combination that would
/// reach one more than this promotes the rank instead (except at `Rank::S`).
pub const MAX_STARS: u8 = 4;

/// Quality tier of a device, ordered C < B < A < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    C = 0,
    B = 1,
    A = 2,
    S = 3,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 4] = [Rank::C, Rank::B, Rank::A, Rank::S];

    pub const TOP: Rank = Rank::S;

    pub fn letter(&self) -> &'static str {
        match self {
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }

    /// Position of the rank in `Rank::ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The rank directly above this one, or `None` at the top.
    pub fn next(&self) -> Option<Rank> {
        match self {
            Rank::C => Some(Rank::B),
            Rank::B => Some(Rank::A),
            Rank::A => Some(Rank::S),
            Rank::S => None,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Rank {
        Rank::ALL[rng.gen_range(0..Rank::ALL.len())]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Device type. Carries no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceType {
    Scope,
    Generator,
    Armor,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [DeviceType::Scope, DeviceType::Generator, DeviceType::Armor];

    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::Scope => "Scope",
            DeviceType::Generator => "Generator",
            DeviceType::Armor => "Armor",
        }
    }

    pub fn random(rng: &mut impl Rng) -> DeviceType {
        match rng.gen_range(0..3) {
            0 => DeviceType::Scope,
            1 => DeviceType::Generator,
            2 => DeviceType::Armor,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single device.
///
/// Equality and ordering look at `(rank, stars)` only: two devices of
/// different types with the same rank and stars compare equal. Anything that
/// needs to tell types apart must compare `device_type` explicitly.
///
/// `stars` stays within `0..=MAX_STARS`, except for the terminal 5-star
/// `Rank::S` device a combination can produce.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Device {
    pub rank: Rank,
    pub stars: u8,
    pub device_type: DeviceType,
}

impl Device {
    pub fn new(rank: Rank, stars: u8, device_type: DeviceType) -> Self {
        Self {
            rank,
            stars,
            device_type,
        }
    }

    /// 0-star device of the given rank and a random type.
    pub fn with_rank(rank: Rank, rng: &mut impl Rng) -> Self {
        Self::new(rank, 0, DeviceType::random(rng))
    }

    /// 0-star device of random rank and random type.
    pub fn random(rng: &mut impl Rng) -> Self {
        let rank = Rank::random(rng);
        Self::with_rank(rank, rng)
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.stars == other.stars
    }
}

impl Eq for Device {}

impl PartialOrd for Device {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Device {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.stars.cmp(&other.stars))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-rank {}-star {} device",
            self.rank, self.stars, self.device_type
        )
    }
}
