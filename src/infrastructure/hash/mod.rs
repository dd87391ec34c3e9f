// Hash functions for string keys

/// Code-point-sum hash for strings
///
/// Adds up the Unicode scalar value of every character. Anagrams such as
/// "Amy" and "May" produce the same value, so callers must expect collisions.
pub fn code_point_sum(s: &str) -> u64 {
    s.chars()
        .fold(0u64, |sum, c| sum.wrapping_add(c as u64))
}

/// Reduce the hash of `s` to a bucket index in `0..bucket_count`
///
/// `bucket_count` must be non-zero; `HashTable` guarantees this at construction.
pub fn bucket_index(s: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket_count must be positive");
    (code_point_sum(s) % bucket_count as u64) as usize
}
