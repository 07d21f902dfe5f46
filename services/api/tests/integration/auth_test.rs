use hearth_api::error::ApiServiceError;
use hearth_api::usecase::auth::{
    ChangePasswordInput, ChangePasswordUseCase, LoginInput, LoginUseCase, SignupInput,
    SignupUseCase,
};
use hearth_auth_types::token::validate_session_token;
use hearth_domain::user::UserRole;

use crate::helpers::MemoryStore;

const SECRET: &str = "integration-test-secret";

fn signup_input(email: &str) -> SignupInput {
    SignupInput {
        name: Some("A".into()),
        email: Some(email.into()),
        password: Some("secret".into()),
        phone: Some("1234567890".into()),
    }
}

#[tokio::test]
async fn signup_then_login_round_trip() {
    let store = MemoryStore::new();

    let signup = SignupUseCase {
        repo: store.clone(),
    };
    let user = signup.execute(signup_input("a@x.com")).await.unwrap();
    assert_eq!(user.role, UserRole::User);

    let login = LoginUseCase {
        repo: store.clone(),
        jwt_secret: SECRET.into(),
    };
    let out = login
        .execute(LoginInput {
            email: Some("a@x.com".into()),
            password: Some("secret".into()),
        })
        .await
        .unwrap();

    let info = validate_session_token(&out.token, SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.role, UserRole::User);
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let store = MemoryStore::new();
    let signup = SignupUseCase {
        repo: store.clone(),
    };

    signup.execute(signup_input("a@x.com")).await.unwrap();
    let result = signup.execute(signup_input("a@x.com")).await;
    assert!(matches!(result, Err(ApiServiceError::UserAlreadyExists)));
}

#[tokio::test]
async fn changed_password_invalidates_the_old_one() {
    let store = MemoryStore::new();
    let user = store.seed_user("sana@x.com", "original", UserRole::User);

    let change = ChangePasswordUseCase {
        repo: store.clone(),
    };
    change
        .execute(
            user.id,
            ChangePasswordInput {
                old_password: Some("original".into()),
                new_password: Some("rotated-1".into()),
            },
        )
        .await
        .unwrap();

    let login = LoginUseCase {
        repo: store.clone(),
        jwt_secret: SECRET.into(),
    };
    let stale = login
        .execute(LoginInput {
            email: Some("sana@x.com".into()),
            password: Some("original".into()),
        })
        .await;
    assert!(matches!(stale, Err(ApiServiceError::InvalidCredential)));

    login
        .execute(LoginInput {
            email: Some("sana@x.com".into()),
            password: Some("rotated-1".into()),
        })
        .await
        .unwrap();
}
