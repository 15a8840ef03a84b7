//! Text rendering of a sentence and the MWEs detected in it.

use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::mwe::Mwe;
use crate::token::Token;

/// Renders the sentence's token forms on one line, then one row per MWE
/// with every member token underlined and the entry id after the last
/// member.
///
/// ```text
/// She  looked  the  word  up  .
///      ╰────╯             ╰╯look_up_V
/// ```
pub struct MweDisplay<'a> {
    sentence: &'a [Token],
    mwes: Vec<&'a Mwe>,
}

impl<'a> MweDisplay<'a> {
    pub fn new(sentence: &'a [Token]) -> Self {
        MweDisplay {
            sentence,
            mwes: Vec::new(),
        }
    }

    pub fn include(&mut self, mwe: &'a Mwe) {
        self.mwes.push(mwe);
    }

    /// Takes self
    pub fn with(mut self, mwes: &'a [Mwe]) -> Self {
        self.mwes.extend(mwes);
        self
    }
}

impl<'a> fmt::Display for MweDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_start_cols = Vec::with_capacity(self.sentence.len());
        let mut token_end_cols = Vec::with_capacity(self.sentence.len());

        let mut opening_line = String::new();
        for (idx, token) in self.sentence.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_start_cols.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token.form());
            token_end_cols.push(UnicodeWidthStr::width(&*opening_line));
        }
        f.write_str(&opening_line)?;

        for mwe in &self.mwes {
            f.write_char('\n')?;
            let mut col = 0;
            for member in mwe.members() {
                let (start, end) = match (
                    token_start_cols.get(member.position),
                    token_end_cols.get(member.position),
                ) {
                    (Some(&start), Some(&end)) => (start, end),
                    // not from this sentence
                    _ => continue,
                };
                for _ in col..start {
                    f.write_char(' ')?;
                }
                f.write_char('╰')?;
                for _ in (start + 1)..end.saturating_sub(1) {
                    f.write_char('─')?;
                }
                if end - start > 1 {
                    f.write_char('╯')?;
                }
                col = end;
            }
            write!(f, "{}", mwe.id())?;
        }

        Ok(())
    }
}
