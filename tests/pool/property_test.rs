/*!
 * Property Tests
 * Invariants that hold for arbitrary request sequences
 */

use bucket_pool::{capacity_of, class_of, BucketPool};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_rent_covers_request(len in 0usize..5000) {
        let pool = BucketPool::<u8>::create(1024, 2).unwrap();
        let buf = pool.rent(len);
        prop_assert!(buf.len() >= len);
        if len > 1024 {
            prop_assert_eq!(buf.len(), len);
        }
    }

    #[test]
    fn prop_retention_bounded(
        max in 1usize..5,
        ops in prop::collection::vec((1usize..300, any::<bool>()), 1..64),
    ) {
        let pool = BucketPool::<u16>::create(256, max).unwrap();
        let mut held = Vec::new();

        for (len, release_now) in ops {
            held.push(pool.rent(len));
            if release_now {
                if let Some(buf) = held.pop() {
                    pool.release(buf, false);
                }
            }
        }
        for buf in held {
            pool.release(buf, false);
        }

        let stats = pool.stats();
        for (index, bucket) in stats.buckets.iter().enumerate() {
            prop_assert!(bucket.retained <= max);
            prop_assert_eq!(bucket.buffer_length, capacity_of(index));
        }
    }

    #[test]
    fn prop_pooled_lengths_are_class_capacities(len in 1usize..=256) {
        let pool = BucketPool::<u8>::create(256, 4).unwrap();
        let buf = pool.rent(len);
        prop_assert_eq!(buf.len(), capacity_of(class_of(len)));
    }
}
