//! Property tests for device ordering, roll resolution and composition keys.

use hawk_blackbox::combiner::upgrade_outcome;
use hawk_blackbox::stabilizer::{CompositionKey, Probability, ROLL_MAX, ROLL_MIN};
use hawk_blackbox::{BlackBoxError, Device, DeviceType, Rank};
use proptest::prelude::*;
use std::cmp::Ordering;

fn arb_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn arb_type() -> impl Strategy<Value = DeviceType> {
    prop::sample::select(DeviceType::ALL.to_vec())
}

fn arb_device() -> impl Strategy<Value = Device> {
    (arb_rank(), 0u8..=4, arb_type()).prop_map(|(rank, stars, t)| Device::new(rank, stars, t))
}

proptest! {
    /// Ordering is lexicographic on (rank, stars) and ignores type.
    #[test]
    fn ordering_matches_rank_then_stars(a in arb_device(), b in arb_device()) {
        let expected = (a.rank, a.stars).cmp(&(b.rank, b.stars));
        prop_assert_eq!(a.cmp(&b), expected);
        prop_assert_eq!(b.cmp(&a), expected.reverse());
        prop_assert_eq!(a == b, expected == Ordering::Equal);
    }

    /// Any two types compare equal when rank and stars match.
    #[test]
    fn equality_ignores_type(rank in arb_rank(), stars in 0u8..=4, t1 in arb_type(), t2 in arb_type()) {
        let a = Device::new(rank, stars, t1);
        let b = Device::new(rank, stars, t2);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    /// Ordering is transitive.
    #[test]
    fn ordering_is_transitive(a in arb_device(), b in arb_device(), c in arb_device()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    /// Roll resolution never goes down as the roll goes up.
    #[test]
    fn rank_for_roll_is_monotonic(
        weights in prop::array::uniform4(0u32..=40),
        r1 in ROLL_MIN..=ROLL_MAX,
        r2 in ROLL_MIN..=ROLL_MAX,
    ) {
        let p = Probability::from_weights(weights);
        let (lo, hi) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
        match (p.rank_for_roll(lo), p.rank_for_roll(hi)) {
            (Ok(a), Ok(b)) => prop_assert!(a <= b),
            (Err(_), Ok(_)) => prop_assert!(false, "low roll failed while high roll resolved"),
            _ => {}
        }
    }

    /// Each rank owns exactly its cumulative bucket; rolls past the total fail.
    #[test]
    fn rank_for_roll_bucket_boundaries(weights in prop::array::uniform4(0u32..=40)) {
        let p = Probability::from_weights(weights);
        let mut start = 1;
        for (i, rank) in Rank::ALL.iter().enumerate() {
            let end = start + weights[i];
            if weights[i] > 0 {
                prop_assert_eq!(p.rank_for_roll(start), Ok(*rank));
                prop_assert_eq!(p.rank_for_roll(end - 1), Ok(*rank));
            }
            start = end;
        }
        let total = p.total();
        prop_assert_eq!(
            p.rank_for_roll(total + 1),
            Err(BlackBoxError::OutOfRange { roll: total + 1, max: total })
        );
    }

    /// Composition keys always count four devices.
    #[test]
    fn composition_key_sums_to_four(devices in prop::array::uniform4(arb_device())) {
        let key = CompositionKey::from_devices(&devices);
        prop_assert_eq!(key.total(), 4);
        for rank in Rank::ALL {
            let n = devices.iter().filter(|d| d.rank == rank).count() as u8;
            prop_assert_eq!(key.count(rank), n);
        }
    }

    /// Stars above 4 only ever appear at the top rank.
    #[test]
    fn five_stars_only_at_top(best in arb_device(), rolled in arb_rank()) {
        let (rank, stars) = upgrade_outcome(best, rolled);
        if rank < Rank::TOP {
            prop_assert!(stars <= 4);
        }
        if rolled > best.rank {
            prop_assert_eq!((rank, stars), (rolled, 1));
        }
    }
}
