// File: src/core/normalizer.rs
use crate::core::config::ReadingConfig;
use crate::core::types::{NormalizedLiteral, NumberInput};
use crate::error::{ReadingError, ReadingResult};

/// Turns an input value into its canonical decimal literal.
/// Integers go through their exact `to_string()`, never through a float.
pub fn validate_number(value: NumberInput) -> ReadingResult<String> {
    match value {
        NumberInput::Literal(s) => Ok(s),
        NumberInput::Integer(n) => Ok(n.to_string()),
        NumberInput::Unsigned(n) => Ok(n.to_string()),
        NumberInput::BigInt(n) => Ok(n.to_string()),
        other => Err(ReadingError::UnsupportedInputKind {
            kind: other.kind().to_string(),
        }),
    }
}

/// Strips grouping characters and the sign, trims redundant fill digits and
/// splits at the decimal point.
pub fn normalize(literal: &str, config: &ReadingConfig) -> ReadingResult<NormalizedLiteral> {
    let stripped: String = literal
        .chars()
        .filter(|&c| c != config.thousand_sign)
        .collect();

    let (is_negative, body) = match stripped.strip_prefix(config.negative_sign) {
        Some(rest) => (true, rest),
        None => (false, stripped.as_str()),
    };

    check_body(literal, body, config)?;

    let fill = config.filled_digit;
    let trimmed = if body.contains(config.point_sign) {
        body.trim_start_matches(fill).trim_end_matches(fill)
    } else {
        body.trim_start_matches(fill)
    };

    let (integral, fractional) = match trimmed.split_once(config.point_sign) {
        Some((int, frac)) => (int, frac),
        None => (trimmed, ""),
    };

    Ok(NormalizedLiteral {
        is_negative,
        integral: integral.to_string(),
        fractional: fractional.to_string(),
    })
}

/// Digits and at most one point, with at least one digit somewhere.
fn check_body(literal: &str, body: &str, config: &ReadingConfig) -> ReadingResult<()> {
    let malformed = |reason: String| ReadingError::MalformedLiteral {
        literal: literal.to_string(),
        reason,
    };

    let mut points = 0;
    let mut digits = 0;
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if c == config.point_sign {
            points += 1;
            if points > 1 {
                return Err(malformed(format!(
                    "more than one '{}'",
                    config.point_sign
                )));
            }
        } else {
            return Err(malformed(format!("unexpected character '{}'", c)));
        }
    }
    if digits == 0 {
        return Err(malformed("no digits".to_string()));
    }
    Ok(())
}
