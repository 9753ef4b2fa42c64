use backend::auth::Claims;
use backend::repos::{CacheBackend, NewUser, UserStore};
use backend::DomainError;
use backend_test_support::unique_helpers::unique_username;
use time::Duration;

use crate::support::build_test_harness;
use crate::support::factory::claims_for;

#[tokio::test]
async fn repeated_reads_within_ttl_hit_the_cache() {
    let harness = build_test_harness().await;
    let profile = harness.register("prof").await;
    let claims = claims_for(&profile);

    let first = harness.state.users.profile(&claims).await.unwrap();
    harness.clock.advance(Duration::seconds(59));
    let second = harness.state.users.profile(&claims).await.unwrap();

    assert_eq!(first, profile);
    assert_eq!(second, profile);
    assert_eq!(harness.store.profile_reads(), 1);
}

#[tokio::test]
async fn reads_after_ttl_go_back_to_the_store() {
    let harness = build_test_harness().await;
    let profile = harness.register("prof").await;
    let claims = claims_for(&profile);

    harness.state.users.profile(&claims).await.unwrap();
    harness.clock.advance(Duration::seconds(60));
    harness.state.users.profile(&claims).await.unwrap();

    assert_eq!(harness.store.profile_reads(), 2);
}

#[tokio::test]
async fn unknown_identity_is_not_cached() {
    let harness = build_test_harness().await;
    let ghost = Claims::new(9_999, "ghost".to_string());

    for _ in 0..2 {
        assert_eq!(
            harness.state.users.profile(&ghost).await,
            Err(DomainError::ProfileNotFound)
        );
    }

    assert_eq!(harness.store.profile_reads(), 2);
    assert_eq!(harness.cache.get("ghost").await.unwrap(), None);
}

#[tokio::test]
async fn registration_after_a_miss_is_visible_immediately() {
    let harness = build_test_harness().await;
    let username = unique_username("late");
    // First user in a fresh store gets id 1.
    let expected = Claims::new(1, username.clone());

    assert_eq!(
        harness.state.users.profile(&expected).await,
        Err(DomainError::ProfileNotFound)
    );

    let created = harness
        .store
        .create_if_absent(NewUser {
            username: username.clone(),
            password_hash: "digest".to_string(),
            name: "Alice".to_string(),
            surname: "Liddell".to_string(),
        })
        .await
        .unwrap()
        .expect("username is free");
    assert_eq!(claims_for(&created), expected);

    assert_eq!(harness.state.users.profile(&expected).await, Ok(created));
}

#[tokio::test]
async fn cached_entry_outlives_a_deleted_row_until_expiry() {
    let harness = build_test_harness().await;
    let profile = harness.register("prof").await;
    let claims = claims_for(&profile);

    harness.state.users.profile(&claims).await.unwrap();
    harness.store.delete(&profile.username);

    assert_eq!(harness.state.users.profile(&claims).await, Ok(profile));

    harness.clock.advance(Duration::seconds(60));
    assert_eq!(
        harness.state.users.profile(&claims).await,
        Err(DomainError::ProfileNotFound)
    );
}
