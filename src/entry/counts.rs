//! Occurrence counters attached to dictionary entries.

use std::fmt;

/// Number of counters stored per entry.
pub const COUNT_FIELDS: usize = 5;

/// Names of the occurrence counters.
///
/// The fifth counter means different things on root and inflected entries,
/// so [`Count::UnmarkedInflected`] and [`Count::MarkedPattern`] share a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Count {
    /// Marked as an MWE, parts adjacent.
    MarkedContinuous,
    /// Marked as an MWE, parts separated.
    MarkedSplit,
    /// Parts found in sequence but not marked as an MWE.
    UnmarkedExact,
    /// Parts found matching the entry's pattern but not marked.
    UnmarkedPattern,
    /// Root entries only: unmarked occurrences of an inflected form.
    UnmarkedInflected,
    /// Inflected entries only: marked occurrences matching a pattern.
    MarkedPattern,
}

impl Count {
    fn slot(self) -> usize {
        match self {
            Count::MarkedContinuous => 0,
            Count::MarkedSplit => 1,
            Count::UnmarkedExact => 2,
            Count::UnmarkedPattern => 3,
            Count::UnmarkedInflected | Count::MarkedPattern => 4,
        }
    }
}

/// Fixed-length vector of non-negative occurrence counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Counts([u32; COUNT_FIELDS]);

impl Counts {
    pub fn new(values: [u32; COUNT_FIELDS]) -> Self {
        Self(values)
    }

    pub fn get(&self, count: Count) -> u32 {
        self.0[count.slot()]
    }

    pub fn as_array(&self) -> &[u32; COUNT_FIELDS] {
        &self.0
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    /// Parse a comma-joined list of exactly five non-negative integers.
    pub(crate) fn parse(text: &str) -> Result<Self, String> {
        let mut values = [0u32; COUNT_FIELDS];
        let mut fields = text.split(',');
        for (slot, value) in values.iter_mut().enumerate() {
            let field = fields
                .next()
                .ok_or_else(|| format!("expected {} counts, found {}", COUNT_FIELDS, slot))?;
            *value = field
                .trim()
                .parse()
                .map_err(|_| format!("count {:?} is not a non-negative integer", field))?;
        }
        if fields.next().is_some() {
            return Err(format!(
                "expected {} counts, found {}",
                COUNT_FIELDS,
                text.split(',').count()
            ));
        }
        Ok(Self(values))
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
