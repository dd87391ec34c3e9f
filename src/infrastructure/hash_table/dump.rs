//! Structural introspection of a hash table
//!
//! `TableDump` renders the human-readable per-bucket listing; `TableSnapshot`
//! is the same structure as plain data for serialization.

use super::HashTable;
use crate::contact::Contact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header line of a dump
pub const DUMP_HEADER: &str = "--- Hash Table Structure ---";
/// Footer line of a dump
pub const DUMP_FOOTER: &str = "--------------------------";
/// Marker printed for a bucket with no entries
pub const EMPTY_MARKER: &str = "Empty";
/// Separator between contacts sharing a bucket
pub const CHAIN_SEPARATOR: &str = " - ";

/// Borrowed textual view of a table, one line per bucket
///
/// Renders `bucket_count + 2` lines: header, one line per bucket, footer.
pub struct TableDump<'a> {
    table: &'a HashTable,
}

impl<'a> TableDump<'a> {
    pub(super) fn new(table: &'a HashTable) -> Self {
        Self { table }
    }

    /// Render the line for a single bucket
    fn bucket_line(&self, index: usize) -> String {
        let rendered: Vec<String> = self.table.chain(index).map(ToString::to_string).collect();
        if rendered.is_empty() {
            return format!("Index {}: {}", index, EMPTY_MARKER);
        }

        format!("Index {}: {}", index, rendered.join(CHAIN_SEPARATOR))
    }

    /// All dump lines, header and footer included
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.table.bucket_count() + 2);
        lines.push(DUMP_HEADER.to_string());
        for index in 0..self.table.bucket_count() {
            lines.push(self.bucket_line(index));
        }
        lines.push(DUMP_FOOTER.to_string());
        lines
    }
}

impl fmt::Display for TableDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// One bucket of a `TableSnapshot`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSnapshot {
    pub index: usize,
    pub entries: Vec<Contact>,
}

/// Owned copy of a table's structure, in bucket and chain order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub bucket_count: usize,
    pub len: usize,
    pub buckets: Vec<BucketSnapshot>,
}

impl TableSnapshot {
    pub(super) fn capture(table: &HashTable) -> Self {
        let buckets = (0..table.bucket_count())
            .map(|index| BucketSnapshot {
                index,
                entries: table.chain(index).cloned().collect(),
            })
            .collect();

        Self {
            bucket_count: table.bucket_count(),
            len: table.len(),
            buckets,
        }
    }
}
