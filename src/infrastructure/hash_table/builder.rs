//! HashTableBuilder for validated table construction

use super::{HashTable, TableResult};

/// Builder for constructing HashTable instances
///
/// # Example
/// ```
/// use contact_table::HashTableBuilder;
///
/// let table = HashTableBuilder::new()
///     .bucket_count(10)
///     .try_build()
///     .unwrap();
/// assert_eq!(table.bucket_count(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct HashTableBuilder {
    bucket_count: usize,
}

impl HashTableBuilder {
    /// Bucket count used when none is set
    pub const DEFAULT_BUCKET_COUNT: usize = 10;

    pub fn new() -> Self {
        Self {
            bucket_count: Self::DEFAULT_BUCKET_COUNT,
        }
    }

    /// Set the number of buckets (fixed for the table's lifetime)
    pub fn bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Build the table
    ///
    /// # Panics
    /// Panics if the bucket count is 0 or the buckets cannot be allocated
    pub fn build(self) -> HashTable {
        match self.try_build() {
            Ok(table) => table,
            Err(err) => panic!("HashTableBuilder: {}", err),
        }
    }

    /// Build with validation, returning Result instead of panicking
    pub fn try_build(self) -> TableResult<HashTable> {
        HashTable::new(self.bucket_count)
    }
}

impl Default for HashTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
