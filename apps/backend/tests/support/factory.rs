use std::sync::Arc;

use argon2::Params;
use backend::adapters::{InMemoryUserStore, MokaCacheBackend};
use backend::auth::{Argon2Hasher, Claims, TokenPair};
use backend::config::CacheConfig;
use backend::repos::Profile;
use backend::services::RegisterRequest;
use backend::state::{build_state, AppState};
use backend::utils::clock::ManualClock;
use backend::SecurityConfig;
use backend_test_support::unique_helpers::unique_username;

pub const PASSWORD: &str = "correct horse battery staple";

/// Everything a test needs to drive the services and inspect collaborators.
pub struct TestHarness {
    pub state: AppState,
    pub store: Arc<InMemoryUserStore>,
    pub cache: Arc<MokaCacheBackend>,
    pub clock: Arc<ManualClock>,
}

/// Argon2 with the smallest legal cost, so tests stay fast.
pub fn cheap_hasher() -> Argon2Hasher {
    Argon2Hasher::with_params(Params::new(8, 1, 1, None).expect("valid argon2 params"))
}

/// State on the in-memory store and moka cache, a manual clock, 15 minute
/// access tokens, 7 day refresh tokens and a 60 second profile TTL.
pub async fn build_test_harness() -> TestHarness {
    let store = Arc::new(InMemoryUserStore::new());
    let cache_config = CacheConfig::new(60);
    let cache = Arc::new(MokaCacheBackend::new(&cache_config));
    let clock = Arc::new(ManualClock::starting_now());

    let state = build_state()
        .with_security(SecurityConfig::for_tests())
        .with_cache(cache_config)
        .with_user_store(store.clone())
        .with_cache_backend(cache.clone())
        .with_hasher(Arc::new(cheap_hasher()))
        .with_clock(clock.clone())
        .build()
        .await
        .expect("test state should build");

    TestHarness {
        state,
        store,
        cache,
        clock,
    }
}

impl TestHarness {
    /// Register a fresh, uniquely named user with [`PASSWORD`].
    pub async fn register(&self, prefix: &str) -> Profile {
        let username = unique_username(prefix);
        self.state
            .users
            .register(RegisterRequest {
                username,
                password: PASSWORD.to_string(),
                name: "Test".to_string(),
                surname: "User".to_string(),
            })
            .await
            .expect("registration should succeed")
            .profile
    }

    /// Register a user and log them in.
    pub async fn logged_in(&self, prefix: &str) -> (Profile, TokenPair) {
        let profile = self.register(prefix).await;
        let pair = self
            .state
            .auth
            .login(&profile.username, PASSWORD)
            .await
            .expect("login should succeed");
        (profile, pair)
    }
}

pub fn claims_for(profile: &Profile) -> Claims {
    Claims::new(profile.id, profile.username.clone())
}
