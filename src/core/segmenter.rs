// File: src/core/segmenter.rs
use crate::core::config::ReadingConfig;
use crate::core::types::{Digit, NormalizedLiteral, ParsedNumber};

/// Slices the integral digits into fixed-size groups, most significant first,
/// left-padding with the fill digit. The fractional digits stay flat.
pub(crate) fn segment(literal: &NormalizedLiteral, config: &ReadingConfig) -> ParsedNumber {
    let size = config.group_size;
    let digits = to_digits(&literal.integral);

    let pad = (size - digits.len() % size) % size;
    let mut padded = vec![config.fill_value(); pad];
    padded.extend(digits);

    let mut integral_groups: Vec<Vec<Digit>> =
        padded.chunks(size).map(|chunk| chunk.to_vec()).collect();
    if integral_groups.is_empty() {
        integral_groups.push(vec![0; size]);
    }

    ParsedNumber {
        is_negative: literal.is_negative,
        integral_groups,
        fractional_digits: to_digits(&literal.fractional),
    }
}

fn to_digits(s: &str) -> Vec<Digit> {
    s.bytes().map(|b| b - b'0').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(integral: &str, fractional: &str) -> NormalizedLiteral {
        NormalizedLiteral {
            is_negative: false,
            integral: integral.to_string(),
            fractional: fractional.to_string(),
        }
    }

    #[test]
    fn pads_most_significant_group() {
        let parsed = segment(&literal("1234567", ""), &ReadingConfig::default());
        assert_eq!(
            parsed.integral_groups,
            vec![vec![0, 0, 1], vec![2, 3, 4], vec![5, 6, 7]]
        );
    }

    #[test]
    fn empty_integral_becomes_one_zero_group() {
        let parsed = segment(&literal("", "05"), &ReadingConfig::default());
        assert_eq!(parsed.integral_groups, vec![vec![0, 0, 0]]);
        assert_eq!(parsed.fractional_digits, vec![0, 5]);
    }

    #[test]
    fn honours_group_size() {
        let config = ReadingConfig {
            group_size: 2,
            ..ReadingConfig::default()
        };
        let parsed = segment(&literal("12345", ""), &config);
        assert_eq!(parsed.integral_groups, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    }
}
