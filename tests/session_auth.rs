mod common;

use crate::common::*;
use socialfi_client_lib::libs::auth::{
    AuthError, Authenticator, CredentialAuthenticator, SimulatedAuthenticator,
};
use socialfi_client_lib::{LoginForm, Session};

#[tokio::test]
async fn test_login_needs_wallet_id_or_connection() {
    let mut session = Session::new(None);
    let result = session.log_in(&LoginForm::default(), &SimulatedAuthenticator).await;

    assert!(matches!(result, Err(AuthError::MissingWalletId)));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_connected_wallet_logs_in_without_credentials() {
    let mut session = Session::new(Some(identity(ALICE)));
    session
        .log_in(&LoginForm::default(), &SimulatedAuthenticator)
        .await
        .unwrap();

    assert!(session.is_logged_in());
    assert_eq!(session.identity(), Some(identity(ALICE)));
}

#[tokio::test]
async fn test_simulated_login_accepts_any_wallet_id() {
    let mut session = Session::new(None);
    session
        .log_in(&LoginForm::new("my-wallet", "anything"), &SimulatedAuthenticator)
        .await
        .unwrap();

    assert!(session.is_logged_in());
    assert_eq!(session.wallet_id(), Some("my-wallet"));
    // not an address, so there is nothing to key a profile by
    assert_eq!(session.identity(), None);

    session.log_out();
    assert!(!session.is_logged_in());
    assert_eq!(session.wallet_id(), None);
}

#[tokio::test]
async fn test_wallet_id_address_becomes_identity() {
    let mut session = Session::new(None);
    session
        .log_in(&LoginForm::new(BOB, "pw"), &SimulatedAuthenticator)
        .await
        .unwrap();
    assert_eq!(session.identity(), Some(identity(BOB)));

    session.set_connected(Some(identity(ALICE)));
    assert_eq!(session.identity(), Some(identity(ALICE)));
}

#[tokio::test]
async fn test_registered_credentials_verify() {
    let (_dir, store) = temp_store();
    let authenticator = CredentialAuthenticator::new(store);

    authenticator.register("wallet-1", "correct horse").unwrap();

    assert!(authenticator.verify("wallet-1", "correct horse").await.is_ok());
    assert!(matches!(
        authenticator.verify("wallet-1", "battery staple").await,
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        authenticator.verify("wallet-2", "correct horse").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let (_dir, store) = temp_store();
    let authenticator = CredentialAuthenticator::new(store);

    authenticator.register("wallet-1", "first").unwrap();
    assert!(matches!(
        authenticator.register("wallet-1", "second"),
        Err(AuthError::AlreadyRegistered(id)) if id == "wallet-1"
    ));
    assert!(authenticator.verify("wallet-1", "first").await.is_ok());
    assert!(matches!(
        authenticator.register("", "pw"),
        Err(AuthError::MissingWalletId)
    ));
}

#[tokio::test]
async fn test_session_login_through_credential_store() {
    let (_dir, store) = temp_store();
    let authenticator = CredentialAuthenticator::new(store);
    authenticator.register(ALICE, "pw").unwrap();

    let mut session = Session::new(None);
    let wrong = session.log_in(&LoginForm::new(ALICE, "nope"), &authenticator).await;
    assert!(wrong.is_err());
    assert!(!session.is_logged_in());

    session
        .log_in(&LoginForm::new(ALICE, "pw"), &authenticator)
        .await
        .unwrap();
    assert!(session.is_logged_in());
    assert_eq!(session.identity(), Some(identity(ALICE)));
}
