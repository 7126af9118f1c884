use crate::shared::entity::{Entity, ID};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: Option<String>,
    /// Argon2id PHC string, only set for local accounts
    pub password_hash: Option<String>,
    pub created: i64,
}

#[derive(Error, Debug)]
#[error("Failed to hash password: {0}")]
pub struct PasswordHashError(String);

impl User {
    pub fn new(username: String, email: Option<String>, created: i64) -> Self {
        Self {
            id: Default::default(),
            username,
            email,
            password_hash: None,
            created,
        }
    }

    /// Hashes with Argon2id and a fresh random salt
    pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordHashError(e.to_string()))
    }

    pub fn set_password(&mut self, password: &str) -> Result<(), PasswordHashError> {
        self.password_hash = Some(Self::hash_password(password)?);
        Ok(())
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let hash = match &self.password_hash {
            Some(hash) => hash,
            None => return false,
        };
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verifies_password() {
        let mut user = User::new("alice".into(), None, 0);
        assert!(!user.verify_password("secret"));

        user.set_password("secret").unwrap();
        assert!(user.verify_password("secret"));
        assert!(!user.verify_password("Secret"));
        assert!(user
            .password_hash
            .as_deref()
            .unwrap()
            .starts_with("$argon2id$"));
    }

    #[test]
    fn same_password_gets_different_hashes() {
        let mut alice = User::new("alice".into(), None, 0);
        let mut bob = User::new("bob".into(), None, 0);
        alice.set_password("hunter2").unwrap();
        bob.set_password("hunter2").unwrap();

        assert_ne!(alice.password_hash, bob.password_hash);
        assert!(alice.verify_password("hunter2"));
        assert!(bob.verify_password("hunter2"));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        let mut user = User::new("alice".into(), None, 0);
        user.password_hash = Some("not_a_valid_hash".into());
        assert!(!user.verify_password("not_a_valid_hash"));
    }
}
