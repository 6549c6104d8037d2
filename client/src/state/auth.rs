//! Sign-in form state and the identity-provider capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no credential store. The form hands credentials to an
//! injected `Authenticator`; the shipped `DemoAuthenticator` accepts anything,
//! so every submission ends in a redirect to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use super::notify::{Notice, Notifier};

/// Where a successful sign-in lands.
pub const POST_SIGN_IN_ROUTE: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    Rejected,
    #[error("Sign-in is unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    pub fn to_notice(&self) -> Notice {
        Notice::error("Sign in failed", self.to_string())
    }
}

/// Identity provider.
pub trait Authenticator {
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the provider refuses the credentials.
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Accepts every credential pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        Ok(Session { email: credentials.email.clone() })
    }
}

/// Authenticator handle shared through Leptos context.
pub type SharedAuthenticator = Arc<dyn Authenticator + Send + Sync>;

/// Sign-in form fields and the in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct SignInState {
    pub email: String,
    pub password: String,
    pub loading: bool,
}

impl SignInState {
    /// Mark the form as submitting and capture its credentials. Returns
    /// `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(Credentials { email: self.email.trim().to_owned(), password: self.password.clone() })
    }

    /// Settle a submission. Returns the route to navigate to on success.
    pub fn complete_submit(&mut self, result: Result<Session, AuthError>, notifier: &dyn Notifier) -> Option<&'static str> {
        self.loading = false;
        match result {
            Ok(_) => {
                notifier.notify(Notice::success("Welcome back", "You have successfully signed in."));
                Some(POST_SIGN_IN_ROUTE)
            }
            Err(e) => {
                notifier.notify(e.to_notice());
                None
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Signing in..." } else { "Sign in" }
    }
}
