// Hash table implementation with separate chaining

use crate::contact::Contact;
use crate::infrastructure::hash::bucket_index;
use tracing::{debug, trace};

pub mod builder;
pub mod dump;
pub mod error;

pub use builder::HashTableBuilder;
pub use dump::{BucketSnapshot, TableDump, TableSnapshot};
pub use error::{TableError, TableResult};

/// Hash table entry: one link of a bucket's chain
#[derive(Debug)]
struct HashNode {
    key: String,
    contact: Contact,
}

impl HashNode {
    /// Create a new hash node
    fn new(key: String, number: String) -> Self {
        let contact = Contact::new(key.clone(), number);
        HashNode { key, contact }
    }
}

/// Fixed-size hash table of contacts keyed by name
///
/// Each bucket holds its chain in insertion order. The bucket count never
/// changes after construction, and entries are never removed.
#[derive(Debug)]
pub struct HashTable {
    /// Array of buckets, each bucket is the chain of nodes hashing to it
    buckets: Vec<Vec<HashNode>>,
    /// Number of elements in the hash table
    size: usize,
}

impl HashTable {
    /// Create a new hash table with the specified number of buckets
    ///
    /// A bucket count of zero is rejected with `InvalidConfiguration`.
    pub fn new(bucket_count: usize) -> TableResult<Self> {
        if bucket_count == 0 {
            return Err(TableError::InvalidConfiguration(
                "bucket count must be positive".to_string(),
            ));
        }

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, Vec::new);

        debug!(bucket_count, "created hash table");
        Ok(HashTable { buckets, size: 0 })
    }

    /// Start a builder with the default bucket count
    pub fn builder() -> HashTableBuilder {
        HashTableBuilder::new()
    }

    /// Calculate the bucket index for a given key
    pub fn hash(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Insert a contact, or update the number if the name is already present
    ///
    /// Allocation failure aborts the process; use `try_insert` to get an
    /// error instead.
    pub fn insert(&mut self, key: impl Into<String>, number: impl Into<String>) {
        let key = key.into();
        let index = self.hash(&key);

        if let Some(number) = self.update_existing(index, &key, number.into()) {
            self.buckets[index].push(HashNode::new(key, number));
            self.size += 1;
            trace!(index, "appended new entry");
        }
    }

    /// Same as `insert`, but reports allocation failure as `ResourceExhaustion`
    pub fn try_insert(
        &mut self,
        key: impl Into<String>,
        number: impl Into<String>,
    ) -> TableResult<()> {
        let key = key.into();
        let index = self.hash(&key);

        if let Some(number) = self.update_existing(index, &key, number.into()) {
            let chain = &mut self.buckets[index];
            chain.try_reserve(1)?;
            chain.push(HashNode::new(key, number));
            self.size += 1;
            trace!(index, "appended new entry");
        }

        Ok(())
    }

    /// Overwrite the number stored under `key` in bucket `index`
    ///
    /// Hands `number` back when the key is not in the chain.
    fn update_existing(&mut self, index: usize, key: &str, number: String) -> Option<String> {
        match self.buckets[index].iter_mut().find(|node| node.key == key) {
            Some(node) => {
                node.contact.set_number(number);
                trace!(index, "updated existing entry");
                None
            }
            None => Some(number),
        }
    }

    /// Look up a contact by name
    pub fn search(&self, key: &str) -> Option<&Contact> {
        let index = self.hash(key);
        let found = self.buckets[index]
            .iter()
            .find(|node| node.key == key)
            .map(|node| &node.contact);

        trace!(index, hit = found.is_some(), "search");
        found
    }

    /// Check whether a contact with this name exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Get the number of elements in the hash table
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the hash table is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets, fixed at construction
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the chain in bucket `index`, or `None` if out of range
    pub fn chain_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(Vec::len)
    }

    /// Contacts in bucket `index`, in chain order
    ///
    /// An out-of-range index yields nothing.
    pub fn chain(&self, index: usize) -> impl Iterator<Item = &Contact> + '_ {
        self.buckets
            .get(index)
            .into_iter()
            .flatten()
            .map(|node| &node.contact)
    }

    /// All contacts in bucket order, then chain order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.buckets.iter().flatten().map(|node| &node.contact)
    }

    /// Per-bucket textual view of the table
    pub fn dump(&self) -> TableDump<'_> {
        TableDump::new(self)
    }

    /// Owned, serializable copy of the table structure
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self)
    }
}
