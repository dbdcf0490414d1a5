// File: src/core/converter.rs
use crate::core::config::ReadingConfig;
use crate::core::types::{Digit, RenderedWords};

/// Renders digit groups into words. Borrows the config; holds no other state.
pub(crate) struct GroupRenderer<'a> {
    config: &'a ReadingConfig,
}

impl<'a> GroupRenderer<'a> {
    pub fn new(config: &'a ReadingConfig) -> Self {
        Self { config }
    }

    /// Tens and ones of a group. Only 1, 4 and 5 change form after a tens
    /// digit, and after "ten" itself only 5 does.
    pub fn render_last_two(&self, b: Digit, c: Digit) -> RenderedWords {
        let irregular = &self.config.irregular;
        let mut output = RenderedWords::new();
        match b {
            0 => output.push(self.digit(c)),
            1 => {
                output.push(irregular.ten.clone());
                match c {
                    0 => {}
                    5 => output.push(irregular.five_tone.clone()),
                    _ => output.push(self.digit(c)),
                }
            }
            _ => {
                output.push(self.digit(b));
                output.push(irregular.ten_tone.clone());
                match c {
                    0 => {}
                    1 => output.push(irregular.one_tone.clone()),
                    4 => output.push(irregular.four_tone.clone()),
                    5 => output.push(irregular.five_tone.clone()),
                    _ => output.push(self.digit(c)),
                }
            }
        }
        output
    }

    /// A full three-digit group. `force_hundred` reads a zero hundreds digit
    /// aloud, as every group after the leading one must.
    pub fn render_group(&self, a: Digit, b: Digit, c: Digit, force_hundred: bool) -> RenderedWords {
        let mut output = RenderedWords::new();
        let has_hundred = a != 0 || force_hundred;
        if has_hundred {
            output.push(self.digit(a));
            output.push(self.config.irregular.hundred.clone());
            if b == 0 {
                if c == 0 {
                    return output;
                }
                output.push(self.config.irregular.odd.clone());
            }
        }
        output.extend(self.render_last_two(b, c));
        output
    }

    /// A group of one to three digits, left-padded to three.
    pub fn render_period(&self, period: &[Digit], force_hundred: bool) -> RenderedWords {
        let mut abc = [0; 3];
        let n = period.len().min(3);
        abc[3 - n..].copy_from_slice(&period[period.len() - n..]);
        self.render_group(abc[0], abc[1], abc[2], force_hundred)
    }

    /// Digits after the point. Two and three digits read like cents and mils;
    /// any other count is read digit by digit.
    pub fn render_fraction(&self, digits: &[Digit]) -> RenderedWords {
        match digits {
            &[b, c] => self.render_last_two(b, c),
            &[a, b, c] => self.render_group(a, b, c, true),
            _ => digits.iter().map(|&d| self.digit(d)).collect(),
        }
    }

    fn digit(&self, d: Digit) -> String {
        self.config.digit_word(d).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(words: RenderedWords) -> String {
        words.join(" ")
    }

    #[test]
    fn last_two_tone_mutations() {
        let config = ReadingConfig::default();
        let r = GroupRenderer::new(&config);
        assert_eq!(joined(r.render_last_two(0, 0)), "không");
        assert_eq!(joined(r.render_last_two(0, 5)), "năm");
        assert_eq!(joined(r.render_last_two(1, 0)), "mười");
        assert_eq!(joined(r.render_last_two(1, 1)), "mười một");
        assert_eq!(joined(r.render_last_two(1, 4)), "mười bốn");
        assert_eq!(joined(r.render_last_two(1, 5)), "mười lăm");
        assert_eq!(joined(r.render_last_two(2, 0)), "hai mươi");
        assert_eq!(joined(r.render_last_two(2, 1)), "hai mươi mốt");
        assert_eq!(joined(r.render_last_two(3, 4)), "ba mươi tư");
        assert_eq!(joined(r.render_last_two(9, 5)), "chín mươi lăm");
        assert_eq!(joined(r.render_last_two(7, 7)), "bảy mươi bảy");
    }

    #[test]
    fn group_hundreds_and_odd_filler() {
        let config = ReadingConfig::default();
        let r = GroupRenderer::new(&config);
        assert_eq!(joined(r.render_group(1, 0, 0, false)), "một trăm");
        assert_eq!(joined(r.render_group(1, 0, 1, false)), "một trăm lẻ một");
        assert_eq!(joined(r.render_group(0, 0, 5, false)), "năm");
        assert_eq!(joined(r.render_group(0, 0, 5, true)), "không trăm lẻ năm");
        assert_eq!(joined(r.render_group(0, 1, 0, true)), "không trăm mười");
        assert_eq!(joined(r.render_group(0, 0, 0, true)), "không trăm");
        assert_eq!(joined(r.render_group(9, 2, 4, false)), "chín trăm hai mươi tư");
    }

    #[test]
    fn short_periods_are_left_padded() {
        let config = ReadingConfig::default();
        let r = GroupRenderer::new(&config);
        assert_eq!(joined(r.render_period(&[2, 1], false)), "hai mươi mốt");
        assert_eq!(joined(r.render_period(&[7], false)), "bảy");
    }

    #[test]
    fn fraction_lengths() {
        let config = ReadingConfig::default();
        let r = GroupRenderer::new(&config);
        assert_eq!(joined(r.render_fraction(&[5])), "năm");
        assert_eq!(joined(r.render_fraction(&[0, 5])), "năm");
        assert_eq!(joined(r.render_fraction(&[2, 5])), "hai mươi lăm");
        assert_eq!(joined(r.render_fraction(&[0, 0, 5])), "không trăm lẻ năm");
        assert_eq!(joined(r.render_fraction(&[1, 2, 3, 4])), "một hai ba bốn");
        assert!(r.render_fraction(&[]).is_empty());
    }
}
