//! Contact table library
//!
//! A fixed-bucket hash table of string-keyed contacts with separate chaining.

// Import various modules
pub mod contact;
pub mod infrastructure;

// Re-export the main items for easier access
pub use contact::Contact;
pub use infrastructure::hash_table::{
    HashTable, HashTableBuilder, TableDump, TableError, TableResult, TableSnapshot,
};
