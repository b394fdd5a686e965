//! Controller tests with a mocked replacement policy.
//!
//! The controller must defer victim choice and recency stamping to its
//! policy, and treat a policy that finds no victim as a fatal breach.

use mockall::predicate::{always, eq};
use snoopsim_core::common::{AccessType, Geometry};
use snoopsim_core::core::cache::{Cache, CoherenceState};

use crate::common::harness::{LINE, SIZE, WAYS};
use crate::common::mocks::policy::MockPolicy;

fn cache_with(policy: MockPolicy) -> Cache {
    Cache::with_policy(Geometry::new(SIZE, WAYS, LINE).unwrap(), Box::new(policy))
}

#[test]
#[should_panic(expected = "no victim")]
fn missing_victim_aborts() {
    let mut policy = MockPolicy::new();
    let _ = policy.expect_victim().returning(|_, _| None);
    let _ = policy.expect_touch().return_const(());

    let mut peers = [cache_with(policy)];
    Cache::access(&mut peers, 0, 0x0, AccessType::Read);
}

/// The way the policy names is the one filled, even when an earlier way is free.
#[test]
fn fill_goes_where_policy_says() {
    let mut policy = MockPolicy::new();
    let _ = policy
        .expect_victim()
        .times(1)
        .withf(|set, cycle| set.len() == WAYS && *cycle == 1)
        .returning(|_, _| Some(1));
    let _ = policy.expect_touch().with(always(), eq(1)).times(1).return_const(());

    let mut peers = [cache_with(policy)];
    Cache::access(&mut peers, 0, 0x0, AccessType::Write);

    let lines = peers[0].lines();
    assert!(!lines[0].valid);
    assert!(lines[1].valid);
    assert_eq!(lines[1].state, CoherenceState::Modified);
}

/// Hits touch the line with the advanced clock and never ask for a victim.
#[test]
fn hit_touches_without_victim_search() {
    let mut policy = MockPolicy::new();
    let _ = policy.expect_victim().times(1).returning(|_, _| Some(0));
    let _ = policy.expect_touch().with(always(), eq(1)).times(1).return_const(());
    let _ = policy.expect_touch().with(always(), eq(2)).times(1).return_const(());
    let _ = policy.expect_touch().with(always(), eq(3)).times(1).return_const(());

    let mut peers = [cache_with(policy)];
    Cache::access(&mut peers, 0, 0x0, AccessType::Read);
    Cache::access(&mut peers, 0, 0x4, AccessType::Read);
    Cache::access(&mut peers, 0, 0x8, AccessType::Write);
    assert_eq!(peers[0].probe(0x0), Some(CoherenceState::Modified));
}
