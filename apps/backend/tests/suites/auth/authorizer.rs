use backend::auth::TokenKind;
use backend::DomainError;
use time::Duration;

use crate::support::factory::claims_for;
use crate::support::{build_test_harness, MapCarrier};

#[tokio::test]
async fn access_token_authorizes_from_cookie_or_header() {
    let harness = build_test_harness().await;
    let (profile, pair) = harness.logged_in("authz").await;
    let authorizer = &harness.state.authorizer;

    let by_cookie = MapCarrier::new().with_cookie("accessToken", &pair.access_token);
    let by_header = MapCarrier::new().with_bearer(&pair.access_token);

    assert_eq!(
        authorizer.authorize(&by_cookie, TokenKind::Access).await,
        Ok(claims_for(&profile))
    );
    assert_eq!(
        authorizer.authorize(&by_header, TokenKind::Access).await,
        Ok(claims_for(&profile))
    );
}

#[tokio::test]
async fn cookie_wins_over_a_bad_header() {
    let harness = build_test_harness().await;
    let (_, pair) = harness.logged_in("authz").await;

    let carrier = MapCarrier::new()
        .with_cookie("accessToken", &pair.access_token)
        .with_bearer("garbage");

    assert!(harness
        .state
        .authorizer
        .authorize(&carrier, TokenKind::Access)
        .await
        .is_ok());
}

#[tokio::test]
async fn refresh_token_in_access_slot_is_invalid() {
    let harness = build_test_harness().await;
    let (_, pair) = harness.logged_in("authz").await;

    let carrier = MapCarrier::new().with_cookie("accessToken", &pair.refresh_token);

    assert_eq!(
        harness
            .state
            .authorizer
            .authorize(&carrier, TokenKind::Access)
            .await,
        Err(DomainError::InvalidToken)
    );
}

#[tokio::test]
async fn expired_access_token_is_rejected() {
    let harness = build_test_harness().await;
    let (_, pair) = harness.logged_in("authz").await;
    let carrier = MapCarrier::new().with_bearer(&pair.access_token);

    harness.clock.advance(Duration::minutes(15));

    assert_eq!(
        harness
            .state
            .authorizer
            .authorize(&carrier, TokenKind::Access)
            .await,
        Err(DomainError::TokenExpired)
    );
}

#[tokio::test]
async fn deleted_subject_loses_access_immediately() {
    let harness = build_test_harness().await;
    let (profile, pair) = harness.logged_in("authz").await;
    let carrier = MapCarrier::new().with_bearer(&pair.access_token);

    assert!(harness.store.delete(&profile.username));

    assert_eq!(
        harness
            .state
            .authorizer
            .authorize(&carrier, TokenKind::Access)
            .await,
        Err(DomainError::SubjectNotFound)
    );
}
