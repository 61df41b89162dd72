//! Percentage rollout bucketing.
//!
//! Every identifier maps to a bucket in `[0, 99]`: the first eight bytes of
//! the SHA-256 digest of its UTF-8 bytes, read big-endian, modulo 100. The
//! mapping is unsigned and independent of process, platform and language, so
//! any implementation that follows it assigns the same buckets.

use sha2::{Digest, Sha256};

/// Number of rollout buckets.
pub const BUCKETS: u64 = 100;

/// Compute the rollout bucket for an identifier.
///
/// ```
/// use featuregate_core::rollout::bucket;
///
/// assert_eq!(bucket("user-123"), 2);
/// assert!(bucket("anyone") < 100);
/// ```
pub fn bucket(id: &str) -> u8 {
    let digest = Sha256::digest(id.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % BUCKETS) as u8
}

/// Whether `id` falls inside a rollout of `percentage`.
///
/// Percentages at or below zero include no one; at or above 100, everyone.
pub fn includes(percentage: i32, id: &str) -> bool {
    i32::from(bucket(id)) < percentage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_buckets() {
        assert_eq!(bucket("user-123"), 2);
        assert_eq!(bucket("user-1"), 94);
        assert_eq!(bucket("alice"), 7);
        assert_eq!(bucket("bob"), 50);
        assert_eq!(bucket(""), 52);
    }

    #[test]
    fn test_bucket_is_stable() {
        for i in 0..50 {
            let id = format!("user-{}", i);
            assert_eq!(bucket(&id), bucket(&id));
        }
    }

    #[test]
    fn test_threshold_boundary() {
        // "bob" sits exactly in bucket 50.
        assert!(!includes(50, "bob"));
        assert!(includes(51, "bob"));
    }

    #[test]
    fn test_out_of_range_percentages() {
        for i in 0..200 {
            let id = format!("entity-{}", i);
            assert!(!includes(0, &id));
            assert!(!includes(-10, &id));
            assert!(includes(100, &id));
            assert!(includes(1000, &id));
        }
    }

    #[test]
    fn test_distribution() {
        let enabled = (0..1000)
            .filter(|i| includes(50, &format!("user-{}", i)))
            .count();

        // Should be close to 50%
        assert!((450..=550).contains(&enabled));
    }
}
