//! Password hashing used for fixture credentials and the signup gate.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$m=...`), the same format
//! the application verifies logins against.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::FixtureError;

/// Hash/verify seam so tests and tools can swap the cost parameters.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, FixtureError>;
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, FixtureError>;
}

#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    /// Custom cost parameters (memory in KiB, iterations, lanes).
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, FixtureError> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| FixtureError::hash(format!("invalid argon2 params: {e}")))?;
        Ok(Self { params })
    }

    /// Minimum-cost parameters for test suites.
    pub fn fast() -> Self {
        Self {
            params: Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
                .unwrap_or_default(),
        }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, FixtureError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| FixtureError::hash(format!("failed to hash password: {e}")))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, FixtureError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| FixtureError::hash(format!("invalid password hash: {e}")))?;
        // parameters come from the PHC string, not from self
        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
