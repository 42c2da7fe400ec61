use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A hashed password. The clear text is discarded after hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

// Matches the minimum length enforced at signup.
const MIN_CLEARTEXT_LEN: usize = 6;

impl Password {
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Password, Self::Err> {
        if s.len() < MIN_CLEARTEXT_LEN {
            return Err(ParseError);
        }
        bcrypt::hash(s).map(Self).map_err(|_| ParseError)
    }
}
