use backend::adapters::SeaUserStore;
use backend::auth::Claims;
use backend::repos::{NewUser, UserStore};
use backend_test_support::unique_helpers::unique_username;
use migration::{migrate, MigrationCommand};
use sea_orm::Database;

async fn sqlite_store() -> SeaUserStore {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open");
    migrate(&db, MigrationCommand::Up)
        .await
        .expect("migrations should apply");
    SeaUserStore::new(db)
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        name: "Barbara".to_string(),
        surname: "Liskov".to_string(),
    }
}

#[tokio::test]
async fn create_then_read_back() {
    let store = sqlite_store().await;
    let username = unique_username("sea");

    let profile = store
        .create_if_absent(new_user(&username))
        .await
        .unwrap()
        .expect("fresh username should insert");

    assert!(profile.id > 0);
    assert_eq!(profile.username, username);
    assert_eq!(profile.name, "Barbara");

    let claims = Claims::new(profile.id, username.clone());
    assert_eq!(store.find_profile(&claims).await.unwrap(), Some(profile.clone()));
    assert!(store.exists(profile.id, &username).await.unwrap());

    let creds = store.find_credentials(&username).await.unwrap().unwrap();
    assert_eq!(creds.id, profile.id);
    assert!(creds.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn duplicate_username_is_swallowed() {
    let store = sqlite_store().await;
    let username = unique_username("sea");

    let first = store.create_if_absent(new_user(&username)).await.unwrap();
    let second = store.create_if_absent(new_user(&username)).await.unwrap();

    assert!(first.is_some());
    assert_eq!(second, None);
}

#[tokio::test]
async fn identity_must_match_both_fields() {
    let store = sqlite_store().await;
    let a = store
        .create_if_absent(new_user(&unique_username("sea")))
        .await
        .unwrap()
        .unwrap();
    let b = store
        .create_if_absent(new_user(&unique_username("sea")))
        .await
        .unwrap()
        .unwrap();

    let crossed = Claims::new(a.id, b.username.clone());
    assert_eq!(store.find_profile(&crossed).await.unwrap(), None);
    assert!(!store.exists(a.id, &b.username).await.unwrap());
    assert_eq!(store.find_credentials("nobody").await.unwrap(), None);
}
