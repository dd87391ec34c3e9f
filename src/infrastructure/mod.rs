//! Infrastructure building blocks: the string hash and the chained table.

pub mod hash;
pub mod hash_table;
