use std::str::FromStr;

use thiserror::Error;

/// A salted bcrypt password hash.
///
/// Plain-text passwords are hashed on construction and can never be
/// read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

const MIN_LENGTH: usize = 6;

impl Password {
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, plain: &str) -> bool {
        pwhash::bcrypt::verify(plain, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.len() < MIN_LENGTH || plain.chars().any(char::is_whitespace) {
            return Err(ParseError);
        }
        let hash = pwhash::bcrypt::hash(plain).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let password = "secret123".parse::<Password>().unwrap();
        assert!(password.verify("secret123"));
        assert!(!password.verify("Secret123"));
    }

    #[test]
    fn reject_short_or_whitespace_passwords() {
        assert!("12345".parse::<Password>().is_err());
        assert!("foo bar baz".parse::<Password>().is_err());
        assert!("\tsecrets\n".parse::<Password>().is_err());
    }
}
