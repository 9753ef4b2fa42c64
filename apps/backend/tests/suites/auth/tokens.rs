use std::sync::Arc;

use backend::auth::{Claims, TokenKind, TokenService};
use backend::utils::clock::ManualClock;
use backend::{DomainError, SecurityConfig};
use time::Duration;

fn service() -> (TokenService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_now());
    (
        TokenService::new(&SecurityConfig::for_tests(), clock.clone()),
        clock,
    )
}

#[test]
fn pair_tokens_differ_and_each_verifies_only_as_its_kind() {
    let (tokens, _) = service();
    let claims = Claims::new(11, "frank");
    let pair = tokens.issue(&claims).unwrap();

    assert_ne!(pair.access_token, pair.refresh_token);
    assert_eq!(
        tokens.verify(pair.token(TokenKind::Access), TokenKind::Access),
        Ok(claims.clone())
    );
    assert_eq!(
        tokens.verify(pair.token(TokenKind::Refresh), TokenKind::Refresh),
        Ok(claims)
    );
    assert_eq!(
        tokens.verify(pair.token(TokenKind::Access), TokenKind::Refresh),
        Err(DomainError::InvalidToken)
    );
}

#[test]
fn refresh_token_expires_after_its_own_ttl() {
    let (tokens, clock) = service();
    let pair = tokens.issue(&Claims::new(11, "frank")).unwrap();

    clock.advance(Duration::days(7) - Duration::seconds(1));
    assert!(tokens.verify(&pair.refresh_token, TokenKind::Refresh).is_ok());
    assert_eq!(
        tokens.verify(&pair.access_token, TokenKind::Access),
        Err(DomainError::TokenExpired)
    );

    clock.advance(Duration::seconds(1));
    assert_eq!(
        tokens.verify(&pair.refresh_token, TokenKind::Refresh),
        Err(DomainError::TokenExpired)
    );
}

#[test]
fn ttls_come_from_configuration_units() {
    let clock = Arc::new(ManualClock::starting_now());
    let tokens = TokenService::new(
        &SecurityConfig::new(b"a".to_vec(), 5, b"r".to_vec(), 2),
        clock,
    );

    assert_eq!(tokens.ttl(TokenKind::Access), Duration::minutes(5));
    assert_eq!(tokens.ttl(TokenKind::Refresh), Duration::days(2));
}

#[test]
fn reissue_later_yields_later_expiry() {
    let (tokens, clock) = service();
    let claims = Claims::new(11, "frank");
    let first = tokens.issue(&claims).unwrap();

    clock.advance(Duration::minutes(10));
    let second = tokens.issue(&claims).unwrap();

    // The first access token dies at +15m, the second survives until +25m.
    clock.advance(Duration::minutes(5));
    assert_eq!(
        tokens.verify(&first.access_token, TokenKind::Access),
        Err(DomainError::TokenExpired)
    );
    assert!(tokens.verify(&second.access_token, TokenKind::Access).is_ok());
}
