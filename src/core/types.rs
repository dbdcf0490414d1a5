// src/core/types.rs
use num_bigint::{BigInt, BigUint};

/// A single decimal digit value, 0..=9.
pub type Digit = u8;

/// Word tokens produced by the renderers, joined by the configured separator at the end.
pub type RenderedWords = Vec<String>;

/// A value handed to the reader.
///
/// Literals keep every digit the caller wrote. Primitive integers are widened
/// to the 128-bit types; anything wider arrives as a `BigInt`. All of them
/// have an exact decimal `to_string()`. `Float` is accepted only so it can be
/// rejected: a binary float cannot carry the digits it was written with.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Literal(String),
    Integer(i128),
    Unsigned(u128),
    BigInt(BigInt),
    Float(f64),
}

impl NumberInput {
    pub fn kind(&self) -> &'static str {
        match self {
            NumberInput::Literal(_) => "literal",
            NumberInput::Integer(_) => "integer",
            NumberInput::Unsigned(_) => "unsigned integer",
            NumberInput::BigInt(_) => "big integer",
            NumberInput::Float(_) => "floating-point number",
        }
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        NumberInput::Literal(s.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(s: String) -> Self {
        NumberInput::Literal(s)
    }
}

impl From<&String> for NumberInput {
    fn from(s: &String) -> Self {
        NumberInput::Literal(s.clone())
    }
}

macro_rules! signed_input {
    ($($t:ty),*) => {
        $(impl From<$t> for NumberInput {
            fn from(n: $t) -> Self {
                NumberInput::Integer(n as i128)
            }
        })*
    };
}

macro_rules! unsigned_input {
    ($($t:ty),*) => {
        $(impl From<$t> for NumberInput {
            fn from(n: $t) -> Self {
                NumberInput::Unsigned(n as u128)
            }
        })*
    };
}

signed_input!(i8, i16, i32, i64, i128, isize);
unsigned_input!(u8, u16, u32, u64, u128, usize);

impl From<BigInt> for NumberInput {
    fn from(n: BigInt) -> Self {
        NumberInput::BigInt(n)
    }
}

impl From<BigUint> for NumberInput {
    fn from(n: BigUint) -> Self {
        NumberInput::BigInt(BigInt::from(n))
    }
}

impl From<f64> for NumberInput {
    fn from(n: f64) -> Self {
        NumberInput::Float(n)
    }
}

impl From<f32> for NumberInput {
    fn from(n: f32) -> Self {
        NumberInput::Float(n as f64)
    }
}

/// A literal after separator removal, sign detection and zero trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLiteral {
    pub is_negative: bool,
    /// Integral digits, possibly empty (reads as zero).
    pub integral: String,
    /// Fractional digits, empty when there is no point or nothing after it.
    pub fractional: String,
}

/// The segmented form of a number, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub is_negative: bool,
    /// Most-significant group first. Never empty; every group holds exactly
    /// `group_size` digits.
    pub integral_groups: Vec<Vec<Digit>>,
    /// Fractional digits in input order, ungrouped.
    pub fractional_digits: Vec<Digit>,
}
