use crate::core::config::ReadingConfig;
use crate::core::converter::GroupRenderer;
use crate::core::normalizer::{normalize, validate_number};
use crate::core::segmenter::segment;
use crate::core::types::{NumberInput, ParsedNumber, RenderedWords};
use crate::error::{ReadingError, ReadingResult};
use tracing::{debug, warn};

/// Reads numbers aloud with one fixed configuration.
/// Every call is independent; the reader can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct NumberReader {
    config: ReadingConfig,
}

impl NumberReader {
    pub fn new(config: ReadingConfig) -> ReadingResult<Self> {
        if let Err(e) = config.validate() {
            warn!("rejected reading config: {}", e);
            return Err(e);
        }
        Ok(Self { config })
    }

    pub fn vietnamese() -> Self {
        Self {
            config: ReadingConfig::vietnamese(),
        }
    }

    pub fn config(&self) -> &ReadingConfig {
        &self.config
    }

    /// Validates, normalizes and segments a value without rendering it.
    pub fn parse(&self, value: impl Into<NumberInput>) -> ReadingResult<ParsedNumber> {
        let literal = validate_number(value.into())?;
        let normalized = normalize(&literal, &self.config)?;
        debug!(?normalized, "normalized '{}'", literal);

        let parsed = segment(&normalized, &self.config);
        let supported = self.config.magnitudes.len();
        if parsed.integral_groups.len() > supported {
            return Err(ReadingError::MagnitudeOutOfRange {
                groups: parsed.integral_groups.len(),
                supported,
            });
        }
        Ok(parsed)
    }

    /// Converts a value to capitalized words. All-or-nothing: any error
    /// surfaces before a single word is rendered.
    pub fn read(&self, value: impl Into<NumberInput>) -> ReadingResult<String> {
        let value = value.into();
        let parsed = match self.parse(value.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(input = ?value, "cannot read number: {}", e);
                return Err(e);
            }
        };
        let text = capitalize_first_letter(&self.render(&parsed).join(&self.config.separator));
        debug!("read {:?} as '{}'", value, text);
        Ok(text)
    }

    /// Assembles the full word sequence for a number `parse` accepted.
    pub(crate) fn render(&self, parsed: &ParsedNumber) -> RenderedWords {
        let renderer = GroupRenderer::new(&self.config);
        let mut output = RenderedWords::new();

        if parsed.is_negative {
            output.push(self.config.negative_text.clone());
        }
        output.extend(self.render_integral(&renderer, &parsed.integral_groups));
        if !parsed.fractional_digits.is_empty() {
            output.push(self.config.point_text.clone());
            output.extend(renderer.render_fraction(&parsed.fractional_digits));
        }
        output.extend(self.config.unit.iter().cloned());
        output
    }

    /// All-zero groups are skipped together with their magnitude word, unless
    /// the number is a single group.
    fn render_integral(&self, renderer: &GroupRenderer<'_>, groups: &[Vec<u8>]) -> RenderedWords {
        let mut output = RenderedWords::new();
        let is_single_group = groups.len() == 1;
        for (index, group) in groups.iter().enumerate() {
            if !is_single_group && group.iter().all(|&d| d == 0) {
                continue;
            }
            output.extend(renderer.render_period(group, index != 0));
            let distance = groups.len() - 1 - index;
            if let Some(words) = self.config.magnitudes.get(distance) {
                output.extend(words.iter().cloned());
            }
        }
        output
    }
}

fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
