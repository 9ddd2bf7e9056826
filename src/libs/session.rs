//! Login state shared by the profile editor and the feed composer.
//!
//! A [`Session`] is plain application state: the front-end owns one and
//! passes it to every controller call instead of each screen tracking its
//! own logged-in flag.

use crate::libs::auth::{AuthError, Authenticator};
use crate::libs::core::models::Identity;
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub wallet_id: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(wallet_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            password: password.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    connected: Option<Identity>,
    wallet_id: Option<String>,
    logged_in: bool,
}

impl Session {
    pub fn new(connected: Option<Identity>) -> Self {
        Self {
            connected,
            wallet_id: None,
            logged_in: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn wallet_id(&self) -> Option<&str> {
        self.wallet_id.as_deref()
    }

    /// The wallet connection changed underneath the session.
    pub fn set_connected(&mut self, connected: Option<Identity>) {
        self.connected = connected;
    }

    /// Key used for contract reads and as the write caller: the connected
    /// address, otherwise a wallet id that is itself an address.
    pub fn identity(&self) -> Option<Identity> {
        self.connected.clone().or_else(|| {
            self.wallet_id
                .as_deref()
                .and_then(|wallet_id| Identity::parse(wallet_id).ok())
        })
    }

    pub async fn log_in(
        &mut self,
        form: &LoginForm,
        authenticator: &dyn Authenticator,
    ) -> Result<(), AuthError> {
        if form.wallet_id.is_empty() {
            if self.connected.is_none() {
                return Err(AuthError::MissingWalletId);
            }
            info!("Logged in with connected wallet");
            self.logged_in = true;
            return Ok(());
        }

        authenticator.verify(&form.wallet_id, &form.password).await?;
        info!(wallet_id = %form.wallet_id, "Logged in");
        self.wallet_id = Some(form.wallet_id.clone());
        self.logged_in = true;
        Ok(())
    }

    pub fn log_out(&mut self) {
        self.wallet_id = None;
        self.logged_in = false;
    }
}
