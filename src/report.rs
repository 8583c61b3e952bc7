//! Group reporting
//!
//! Writes the anagram groups of one key length to any [`Write`] sink.

use crate::index::AnagramIndex;
use std::io::{BufWriter, Write};

/// Rule printed above and below each group header
pub const GROUP_RULE: &str = "---------------";

/// What a report emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub groups: usize,
    pub tokens: usize,
}

/// Writes anagram groups to a sink
pub struct Reporter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: BufWriter::new(sink),
        }
    }

    /// Write every group whose key is exactly `length` characters long
    ///
    /// Groups are written in ascending key order and numbered from 1 on
    /// every call.
    pub fn report(
        &mut self,
        index: &AnagramIndex,
        length: usize,
    ) -> std::io::Result<ReportSummary> {
        let mut summary = ReportSummary::default();

        for (key, group) in index.groups_of_length(length) {
            log::trace!("Reporting group {:?}", key.as_str());
            summary.groups += 1;
            self.write_group(summary.groups, group)?;
            summary.tokens += group.len();
        }

        self.writer.flush()?;
        Ok(summary)
    }

    fn write_group(&mut self, number: usize, group: &[String]) -> std::io::Result<()> {
        writeln!(self.writer, "{}", GROUP_RULE)?;
        writeln!(self.writer, "GROUP {}", number)?;
        writeln!(self.writer, "{}", GROUP_RULE)?;
        for token in group {
            writeln!(self.writer, "{}", token)?;
        }
        Ok(())
    }

    /// Flush and return the sink
    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

/// Report groups of `length` into `sink`
pub fn report<W: Write>(
    index: &AnagramIndex,
    length: usize,
    sink: W,
) -> std::io::Result<ReportSummary> {
    Reporter::new(sink).report(index, length)
}
