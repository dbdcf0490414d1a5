// File: src/core/config.rs
use crate::error::{ReadingError, ReadingResult};
use serde::{Deserialize, Serialize};

/// Maps a group's distance from the decimal point to the words naming its magnitude.
/// Distance 0 is the group just left of the point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MagnitudeTable(Vec<Vec<String>>);

impl MagnitudeTable {
    pub fn new(entries: Vec<Vec<String>>) -> Self {
        Self(entries)
    }

    pub fn get(&self, distance: usize) -> Option<&[String]> {
        self.0.get(distance).map(Vec::as_slice)
    }

    /// Number of groups this table can name.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MagnitudeTable {
    fn default() -> Self {
        Self(words(&[
            &[],
            &["nghìn"],
            &["triệu"],
            &["tỉ"],
            &["nghìn", "tỉ"],
            &["triệu", "tỉ"],
            &["tỉ", "tỉ"],
        ]))
    }
}

/// Words that do not follow the plain digit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrregularWords {
    /// Filler between a hundreds phrase and a lone ones digit ("lẻ").
    pub odd: String,
    pub ten: String,
    pub hundred: String,
    /// Trailing 1 after a tens digit of 2 or more.
    pub one_tone: String,
    /// Trailing 4 after a tens digit of 2 or more.
    pub four_tone: String,
    /// Trailing 5 after any nonzero tens digit.
    pub five_tone: String,
    /// "tens" after a tens digit of 2 or more.
    pub ten_tone: String,
}

impl Default for IrregularWords {
    fn default() -> Self {
        Self {
            odd: "lẻ".into(),
            ten: "mười".into(),
            hundred: "trăm".into(),
            one_tone: "mốt".into(),
            four_tone: "tư".into(),
            five_tone: "lăm".into(),
            ten_tone: "mươi".into(),
        }
    }
}

/// Everything language-specific the reader needs. Immutable once built;
/// a partial JSON document overrides only the fields it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub separator: String,
    /// Words appended to every result.
    pub unit: Vec<String>,
    pub negative_sign: char,
    pub point_sign: char,
    pub thousand_sign: char,
    pub group_size: usize,
    pub filled_digit: char,
    /// Digit words, index = digit value.
    pub digits: Vec<String>,
    pub magnitudes: MagnitudeTable,
    pub negative_text: String,
    pub point_text: String,
    pub irregular: IrregularWords,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self::vietnamese()
    }
}

impl ReadingConfig {
    /// Vietnamese, read as an amount of đồng.
    pub fn vietnamese() -> Self {
        Self {
            separator: " ".into(),
            unit: vec!["đồng".into()],
            negative_sign: '-',
            point_sign: '.',
            thousand_sign: ',',
            group_size: 3,
            filled_digit: '0',
            digits: [
                "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect(),
            magnitudes: MagnitudeTable::default(),
            negative_text: "âm".into(),
            point_text: "chấm".into(),
            irregular: IrregularWords::default(),
        }
    }

    pub fn from_json_str(json: &str) -> ReadingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReadingResult<()> {
        if self.digits.len() < 10 {
            return Err(invalid(format!(
                "need 10 digit words, got {}",
                self.digits.len()
            )));
        }
        if !(1..=3).contains(&self.group_size) {
            return Err(invalid(format!(
                "group size must be between 1 and 3, got {}",
                self.group_size
            )));
        }
        if !self.filled_digit.is_ascii_digit() {
            return Err(invalid(format!(
                "fill character '{}' is not a digit",
                self.filled_digit
            )));
        }
        let signs = [
            ("negative sign", self.negative_sign),
            ("point sign", self.point_sign),
            ("thousand sign", self.thousand_sign),
        ];
        for (i, &(name, sign)) in signs.iter().enumerate() {
            if sign.is_ascii_digit() {
                return Err(invalid(format!("{} '{}' is a digit", name, sign)));
            }
            if let Some(&(other, _)) = signs[i + 1..].iter().find(|(_, s)| *s == sign) {
                return Err(invalid(format!("{} and {} are both '{}'", name, other, sign)));
            }
        }
        if self.magnitudes.is_empty() {
            return Err(invalid("magnitude table is empty".to_string()));
        }
        Ok(())
    }

    pub fn digit_word(&self, digit: u8) -> &str {
        &self.digits[digit as usize]
    }

    /// Numeric value of the fill character.
    pub fn fill_value(&self) -> u8 {
        self.filled_digit as u8 - b'0'
    }
}

fn invalid(reason: String) -> ReadingError {
    ReadingError::InvalidConfig(reason)
}

fn words(table: &[&[&str]]) -> Vec<Vec<String>> {
    table
        .iter()
        .map(|row| row.iter().map(|w| w.to_string()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_vietnamese() {
        let config = ReadingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.digit_word(5), "năm");
        assert_eq!(config.magnitudes.len(), 7);
        assert_eq!(config.magnitudes.get(4), Some(&["nghìn".to_string(), "tỉ".to_string()][..]));
        assert_eq!(config.magnitudes.get(7), None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ReadingConfig::from_json_str(r#"{"unit": [], "separator": "-"}"#).unwrap();
        assert!(config.unit.is_empty());
        assert_eq!(config.separator, "-");
        assert_eq!(config.point_text, "chấm");
        assert_eq!(config.irregular.five_tone, "lăm");
    }

    #[test]
    fn rejects_short_digit_table() {
        let mut config = ReadingConfig::default();
        config.digits.truncate(9);
        assert!(matches!(config.validate(), Err(ReadingError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_colliding_signs() {
        let mut config = ReadingConfig::default();
        config.thousand_sign = '.';
        assert!(config.validate().is_err());

        let mut config = ReadingConfig::default();
        config.negative_sign = '7';
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_group_size_and_fill() {
        let mut config = ReadingConfig::default();
        config.group_size = 4;
        assert!(config.validate().is_err());

        let mut config = ReadingConfig::default();
        config.filled_digit = 'x';
        assert!(config.validate().is_err());
    }
}
