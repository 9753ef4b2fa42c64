use backend::auth::TokenKind;
use backend::DomainError;
use time::Duration;

use crate::support::factory::claims_for;
use crate::support::{build_test_harness, MapCarrier};

#[tokio::test]
async fn refresh_mints_a_new_pair_with_fresh_expiry() {
    let harness = build_test_harness().await;
    let (profile, pair) = harness.logged_in("refresh").await;

    harness.clock.advance(Duration::minutes(14));
    let carrier = MapCarrier::new().with_cookie("refreshToken", &pair.refresh_token);
    let renewed = harness.state.auth.refresh(&carrier).await.unwrap();

    // Old access token dies at +15m; the renewed one lives until +29m.
    harness.clock.advance(Duration::minutes(10));
    assert_eq!(
        harness.state.tokens.verify(&pair.access_token, TokenKind::Access),
        Err(DomainError::TokenExpired)
    );
    assert_eq!(
        harness.state.tokens.verify(&renewed.access_token, TokenKind::Access),
        Ok(claims_for(&profile))
    );
}

#[tokio::test]
async fn refresh_requires_the_refresh_cookie() {
    let harness = build_test_harness().await;
    let (_, pair) = harness.logged_in("refresh").await;

    let header_only = MapCarrier::new().with_bearer(&pair.refresh_token);
    assert_eq!(
        harness.state.auth.refresh(&header_only).await,
        Err(DomainError::MissingToken)
    );

    let wrong_kind = MapCarrier::new().with_cookie("refreshToken", &pair.access_token);
    assert_eq!(
        harness.state.auth.refresh(&wrong_kind).await,
        Err(DomainError::InvalidToken)
    );
}

#[tokio::test]
async fn refresh_for_deleted_user_is_refused() {
    let harness = build_test_harness().await;
    let (profile, pair) = harness.logged_in("refresh").await;
    harness.store.delete(&profile.username);

    let carrier = MapCarrier::new().with_cookie("refreshToken", &pair.refresh_token);
    assert_eq!(
        harness.state.auth.refresh(&carrier).await,
        Err(DomainError::SubjectNotFound)
    );
}

#[tokio::test]
async fn expired_refresh_token_is_refused() {
    let harness = build_test_harness().await;
    let (_, pair) = harness.logged_in("refresh").await;

    harness.clock.advance(Duration::days(7));
    let carrier = MapCarrier::new().with_cookie("refreshToken", &pair.refresh_token);
    assert_eq!(
        harness.state.auth.refresh(&carrier).await,
        Err(DomainError::TokenExpired)
    );
}
