use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

/// Fixed salt appended to every password before hashing. Stored credentials
/// depend on it, so changing it invalidates every account.
const PASSWORD_SALT: &str = "sehd_salt";

/// SHA-256 of `plaintext + salt`, base64 encoded
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.update(PASSWORD_SALT.as_bytes());
    STANDARD.encode(hasher.finalize())
}

pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    hash_password(plaintext) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_password("admin123"), hash_password("admin123"));
        assert_ne!(hash_password("admin123"), hash_password("admin124"));
    }

    #[test]
    fn hash_is_base64_of_a_sha256_digest() {
        let hash = hash_password("staff123");
        assert_eq!(STANDARD.decode(&hash).unwrap().len(), 32);
    }

    #[test]
    fn verify_accepts_only_the_original_plaintext() {
        let stored = hash_password("viewer123");
        assert!(verify_password("viewer123", &stored));
        assert!(!verify_password("Viewer123", &stored));
        assert!(!verify_password("", &stored));
    }
}
