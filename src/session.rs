//! Access control: two roles, one session.
//!
//! Admin holds full mutation rights, Guest is read-only. The session keeps
//! the current role plus the intermediate login-flow state; logout clears
//! both. Credential verification sits behind a trait so the shipped
//! exact-match passphrase check can be swapped for a real identity mechanism
//! without touching the repositories.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Guest,
}

impl Role {
    pub fn role_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "guest" | "shared" => Some(Self::Guest),
            _ => None,
        }
    }

    pub fn role_as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Guest => "Guest",
        }
    }
}

/// Pluggable credential check for the Admin role.
pub trait CredentialCheck {
    fn verify(&self, passphrase: &str) -> bool;
}

/// Exact-match shared passphrase. No hashing, no lockout, no rate limiting:
/// this tool runs on a trusted internal network with a single shared secret.
pub struct StaticPassphrase(pub String);

impl CredentialCheck for StaticPassphrase {
    fn verify(&self, passphrase: &str) -> bool {
        self.0 == passphrase
    }
}

#[derive(Debug, Default)]
pub struct Session {
    role: Option<Role>,
    /// True while the Admin login flow has been started but not completed.
    login_pending: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn begin_admin_login(&mut self) {
        self.login_pending = true;
    }

    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    pub fn login_admin(&mut self, check: &dyn CredentialCheck, passphrase: &str) -> AppResult<()> {
        if !check.verify(passphrase) {
            return Err(AppError::BadCredentials);
        }
        self.role = Some(Role::Admin);
        self.login_pending = false;
        Ok(())
    }

    pub fn login_guest(&mut self) {
        self.role = Some(Role::Guest);
        self.login_pending = false;
    }

    /// Reset to no role, dropping any half-finished login flow.
    pub fn logout(&mut self) {
        self.role = None;
        self.login_pending = false;
    }

    /// Gate for mutating repository operations. Called before the store is
    /// touched, so a rejected call leaves both tables unchanged.
    pub fn require_admin(&self, operation: &str) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::AccessDenied(operation.to_string()))
        }
    }
}
