//! Password value object.
//!
//! Owns hashing and verification so the rest of the crate never touches a
//! plaintext password or a bare hash string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::{DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM};
use crate::errors::{AppError, AppResult};

/// Argon2id cost parameters, configurable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

/// Salted one-way credential hash in PHC string format.
///
/// Immutable and compared by value. The cost parameters travel inside the
/// hash string, so verification never needs the original `HashCost`.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Content rules (blankness) are the registration workflow's job; this
    /// type accepts any non-empty byte sequence.
    pub fn new(plain_text: &str, cost: &HashCost) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2(cost)?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing hash loaded from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext password against this hash.
    ///
    /// Unparseable hashes verify as false rather than erroring, so a
    /// corrupt row behaves like a wrong password.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }

    fn argon2(cost: &HashCost) -> AppResult<Argon2<'static>> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| AppError::internal(format!("Invalid hash cost: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    // Small cost keeps the test suite fast; production cost comes from config.
    fn test_cost() -> HashCost {
        HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let password = Password::new("SecurePassword123!", &test_cost()).unwrap();

        assert!(password.verify("SecurePassword123!"));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn stored_hash_is_not_the_plaintext() {
        let password = Password::new("hunter2", &test_cost()).unwrap();

        assert_ne!(password.as_str(), "hunter2");
        assert!(!password.as_str().contains("hunter2"));
        assert!(password.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn from_hash_restores_verification() {
        let password = Password::new("TestPassword123", &test_cost()).unwrap();
        let stored = password.into_string();

        let restored = Password::from_hash(stored);
        assert!(restored.verify("TestPassword123"));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let first = Password::new("SamePassword123", &test_cost()).unwrap();
        let second = Password::new("SamePassword123", &test_cost()).unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify("SamePassword123"));
        assert!(second.verify("SamePassword123"));
    }

    #[test]
    fn cost_parameters_are_encoded_in_the_hash() {
        let password = Password::new("x", &test_cost()).unwrap();
        assert!(password.as_str().contains("m=1024,t=1,p=1"));
    }

    #[test]
    fn corrupt_hash_verifies_false() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify("anything"));
    }
}
