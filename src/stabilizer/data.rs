//! Static probability data for every stabilizer level.
//!
//! Rows are `([C, B, A, S] input counts, [C, B, A, S] output weights)`.
//! Several weights are community estimates rather than measured rates and
//! are kept as observed, including rows that do not sum to 100.

pub type TableRow = ([u8; 4], [u32; 4]);

pub const LEVEL_0: [TableRow; 35] = [
    ([4, 0, 0, 0], [50, 50, 0, 0]),
    ([3, 1, 0, 0], [39, 52, 8, 0]),   // sums to 99
    ([3, 0, 1, 0], [41, 40, 13, 6]),  // C estimated
    ([3, 0, 0, 1], [43, 43, 0, 14]),
    ([2, 2, 0, 0], [27, 55, 17, 1]),  // C estimated
    ([2, 1, 1, 0], [29, 42, 23, 6]),  // C estimated
    ([2, 1, 0, 1], [30, 45, 10, 15]), // C estimated
    ([2, 0, 2, 0], [30, 29, 29, 12]), // C estimated
    ([2, 0, 1, 1], [31, 31, 16, 22]), // C estimated
    ([2, 0, 0, 2], [33, 33, 0, 33]),  // sums to 99
    ([1, 3, 0, 0], [15, 57, 27, 1]),  // C estimated
    ([1, 2, 1, 0], [15, 44, 34, 7]),  // C estimated
    ([1, 2, 0, 1], [16, 47, 20, 17]), // C estimated
    ([1, 1, 2, 0], [15, 31, 40, 14]), // C estimated
    ([1, 1, 1, 1], [16, 33, 27, 24]), // C estimated
    ([1, 1, 0, 2], [18, 35, 11, 36]), // C estimated
    ([1, 0, 3, 0], [16, 16, 48, 20]), // C estimated
    ([1, 0, 2, 1], [17, 17, 34, 32]), // C estimated
    ([1, 0, 1, 2], [19, 18, 18, 45]), // C estimated
    ([1, 0, 0, 3], [20, 20, 0, 60]),
    ([0, 4, 0, 0], [0, 60, 38, 2]),
    ([0, 3, 1, 0], [0, 47, 45, 8]),
    ([0, 3, 0, 1], [0, 50, 32, 18]),
    ([0, 2, 2, 0], [0, 32, 53, 15]),
    ([0, 2, 1, 1], [0, 35, 40, 26]),  // sums to 101
    ([0, 2, 0, 2], [0, 37, 24, 39]),
    ([0, 1, 3, 0], [0, 17, 61, 22]),
    ([0, 1, 2, 1], [0, 18, 48, 34]),
    ([0, 1, 1, 2], [0, 20, 32, 48]),
    ([0, 1, 0, 3], [0, 21, 14, 65]),
    ([0, 0, 4, 0], [0, 0, 70, 30]),
    ([0, 0, 3, 1], [0, 0, 57, 43]),
    ([0, 0, 2, 2], [0, 0, 41, 59]),
    ([0, 0, 1, 3], [0, 0, 23, 77]),
    ([0, 0, 0, 4], [0, 0, 0, 100]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_level_0_covers_every_composition() {
        let keys: HashSet<[u8; 4]> = LEVEL_0.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), LEVEL_0.len());

        let mut expected = 0;
        for c in 0..=4u8 {
            for b in 0..=(4 - c) {
                for a in 0..=(4 - c - b) {
                    let s = 4 - c - b - a;
                    assert!(keys.contains(&[c, b, a, s]), "missing {:?}", [c, b, a, s]);
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, LEVEL_0.len());
    }

    #[test]
    fn test_level_0_rows_sum_close_to_100() {
        for (key, weights) in LEVEL_0.iter() {
            let total: u32 = weights.iter().sum();
            assert!((99..=101).contains(&total), "{key:?} sums to {total}");
        }
    }

    #[test]
    fn test_level_0_never_outputs_absent_lower_ranks() {
        // With no C input there is no C output, and so on up the ranks.
        for (key, weights) in LEVEL_0.iter() {
            let lowest_input = key.iter().position(|&n| n > 0).unwrap();
            for (rank_index, weight) in weights.iter().enumerate().take(lowest_input) {
                assert_eq!(*weight, 0, "{key:?} outputs rank index {rank_index}");
            }
        }
    }
}
