//! The experience table shared by every skill.
//!
//! Entry `i` is the cumulative experience needed to reach level `i`.
//! Entry `0` is always `0.0` and the entries are strictly increasing.

/// Highest level the table can represent.
pub const MAX_LEVEL: u32 = 60;

/// Level cap applied to a skill that has no cap bonus.
pub const DEFAULT_LEVEL_CAP: u32 = 50;

/// Cumulative experience thresholds, indexed by level.
pub const EXPERIENCE_TABLE: [f64; MAX_LEVEL as usize + 1] = [
    0.0,
    50.0,
    175.0,
    375.0,
    675.0,
    1_175.0,
    1_925.0,
    2_925.0,
    4_425.0,
    6_425.0,
    9_925.0,
    14_925.0,
    22_425.0,
    32_425.0,
    47_425.0,
    67_425.0,
    97_425.0,
    147_425.0,
    222_425.0,
    322_425.0,
    522_425.0,
    822_425.0,
    1_222_425.0,
    1_722_425.0,
    2_322_425.0,
    3_022_425.0,
    3_822_425.0,
    4_722_425.0,
    5_722_425.0,
    6_822_425.0,
    8_022_425.0,
    9_322_425.0,
    10_722_425.0,
    12_222_425.0,
    13_822_425.0,
    15_522_425.0,
    17_322_425.0,
    19_222_425.0,
    21_222_425.0,
    23_322_425.0,
    25_522_425.0,
    27_822_425.0,
    30_222_425.0,
    32_722_425.0,
    35_322_425.0,
    38_072_425.0,
    40_972_425.0,
    44_072_425.0,
    47_472_425.0,
    51_172_425.0,
    55_172_425.0,
    59_472_425.0,
    64_072_425.0,
    68_972_425.0,
    74_172_425.0,
    79_672_425.0,
    85_472_425.0,
    91_572_425.0,
    97_972_425.0,
    104_672_425.0,
    111_672_425.0,
];

#[must_use]
/// Cumulative experience required to reach `level`, or `None` past [`MAX_LEVEL`].
pub fn threshold(level: u32) -> Option<f64> {
    EXPERIENCE_TABLE.get(level as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_starts_at_zero_and_strictly_increases() {
        assert_eq!(EXPERIENCE_TABLE[0], 0.0);
        assert!(EXPERIENCE_TABLE.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn well_known_thresholds() {
        assert_eq!(threshold(1), Some(50.0));
        assert_eq!(threshold(2), Some(175.0));
        assert_eq!(threshold(DEFAULT_LEVEL_CAP), Some(55_172_425.0));
        assert_eq!(threshold(MAX_LEVEL), Some(111_672_425.0));
        assert_eq!(threshold(MAX_LEVEL + 1), None);
    }
}
