/*!
 * Shared Pool Tests
 * Process-wide singleton and trait-object collaborators
 */

use bucket_pool::{ArrayPool, BucketPool};
use serial_test::serial;
use std::sync::Barrier;

/// Minimal collaborator written against the trait, like a string builder
fn join_with(pool: &dyn ArrayPool<char>, parts: &[&str], sep: char) -> String {
    let needed: usize = parts.iter().map(|p| p.chars().count() + 1).sum();
    let mut scratch = pool.rent(needed);
    let mut len = 0;

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            scratch[len] = sep;
            len += 1;
        }
        for ch in part.chars() {
            scratch[len] = ch;
            len += 1;
        }
    }

    let out = scratch[..len].iter().collect();
    pool.release(scratch, true);
    out
}

#[test]
#[serial]
fn test_shared_returns_same_instance() {
    let a = BucketPool::<i32>::shared();
    let b = BucketPool::<i32>::shared();
    assert!(std::ptr::eq(a, b));
}

#[test]
#[serial]
fn test_shared_concurrent_first_access() {
    let threads = 8;
    let barrier = Barrier::new(threads);

    let addrs: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    BucketPool::<(u8, u8, u8)>::shared() as *const _ as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
#[serial]
fn test_shared_isolated_from_explicit_pool() {
    let explicit = BucketPool::<i64>::create(64, 2).unwrap();
    let buf = explicit.rent(10);
    explicit.release(buf, false);

    let shared = BucketPool::<i64>::shared();
    assert!(!std::ptr::eq(shared, &explicit));
    assert_eq!(explicit.stats().retained(), 1);
}

#[test]
fn test_trait_object_collaborator() {
    let pool = BucketPool::<char>::create(256, 4).unwrap();

    let joined = join_with(&pool, &["alpha", "beta", "gamma"], ',');
    assert_eq!(joined, "alpha,beta,gamma");

    // Scratch buffer came back cleared
    let reused = pool.rent(17);
    assert!(reused.iter().all(|&c| c == char::default()));
    assert_eq!(pool.stats().hits, 1);
}
