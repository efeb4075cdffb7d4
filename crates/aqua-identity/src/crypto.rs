//! Password digests.

use sha2::{Digest, Sha256};

/// SHA-256 digest of a password
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PasswordDigest([u8; 32]);

impl PasswordDigest {
    /// Hash a clear-text password
    pub fn of(password: &str) -> Self {
        let hash = Sha256::digest(password.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// Check a clear-text candidate against this digest.
    ///
    /// Compares every byte regardless of where the first mismatch is.
    pub fn matches(&self, candidate: &str) -> bool {
        let other = Self::of(candidate);
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

// Never print digest material.
impl core::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_matches_same_password() {
        let digest = PasswordDigest::of("hunter2");
        assert!(digest.matches("hunter2"));
        assert!(!digest.matches("hunter3"));
        assert!(!digest.matches(""));
    }

    #[test]
    fn test_digest_is_sha256() {
        // SHA-256("abc")
        let digest = PasswordDigest::of("abc");
        assert_eq!(digest.as_bytes()[0], 0xba);
        assert_eq!(digest.as_bytes()[31], 0xad);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let digest = PasswordDigest::of("secret");
        assert_eq!(format!("{:?}", digest), "PasswordDigest(..)");
    }
}
