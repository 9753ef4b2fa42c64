use backend::repos::UserStore;
use backend::services::RegisterRequest;
use backend::utils::clock::Clock;
use backend::DomainError;
use backend_test_support::unique_helpers::unique_username;

use crate::support::build_test_harness;
use crate::support::factory::PASSWORD;

fn request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: PASSWORD.to_string(),
        name: "Margaret".to_string(),
        surname: "Hamilton".to_string(),
    }
}

#[tokio::test]
async fn register_stores_a_hashed_password() {
    let harness = build_test_harness().await;
    let username = unique_username("reg");

    let registration = harness.state.users.register(request(&username)).await.unwrap();

    assert_eq!(registration.message, "USER_SUCCESSFULLY_REGISTERED");
    assert_eq!(registration.date, harness.clock.now());
    let creds = harness
        .store
        .find_credentials(&username)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(creds.id, registration.profile.id);
    assert_ne!(creds.password_hash, PASSWORD);
    assert!(creds.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn second_registration_with_same_username_conflicts() {
    let harness = build_test_harness().await;
    let username = unique_username("reg");

    harness.state.users.register(request(&username)).await.unwrap();
    let mut again = request(&username);
    again.name = "Someone Else".to_string();

    assert_eq!(
        harness.state.users.register(again).await,
        Err(DomainError::DuplicateUsername)
    );
    let creds = harness.store.find_credentials(&username).await.unwrap();
    assert!(creds.is_some());
}

#[tokio::test]
async fn blank_fields_are_rejected_before_touching_the_store() {
    let harness = build_test_harness().await;
    let mut blank = request("");
    blank.surname = "   ".to_string();

    assert!(matches!(
        harness.state.users.register(blank).await,
        Err(DomainError::Validation(_))
    ));
    assert_eq!(harness.store.find_credentials("").await.unwrap(), None);
}

#[tokio::test]
async fn registration_does_not_warm_the_cache() {
    let harness = build_test_harness().await;
    let username = unique_username("reg");

    harness.state.users.register(request(&username)).await.unwrap();

    assert_eq!(harness.cache.entry_count(), 0);
    assert_eq!(harness.store.profile_reads(), 0);
}
