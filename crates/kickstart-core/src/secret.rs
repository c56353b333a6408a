//! Secret key generation for the generated project's example env file

use rand::rngs::OsRng;
use rand::Rng;

/// Length Django uses for its own generated secret keys
pub const SECRET_KEY_LEN: usize = 50;

/// Same character set as `django.core.management.utils.get_random_secret_key`
const SECRET_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*(-_=+)";

/// Produce one fresh 50-character secret key
///
/// Sampled from the OS CSPRNG; a new key is generated per invocation and
/// never reused across projects.
pub fn generate_secret_key() -> String {
    let mut rng = OsRng;
    (0..SECRET_KEY_LEN)
        .map(|_| SECRET_CHARSET[rng.gen_range(0..SECRET_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_length() {
        assert_eq!(generate_secret_key().len(), SECRET_KEY_LEN);
    }

    #[test]
    fn test_keys_are_distinct_per_invocation() {
        let a = generate_secret_key();
        let b = generate_secret_key();
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_uses_expected_charset() {
        let key = generate_secret_key();
        for c in key.bytes() {
            assert!(SECRET_CHARSET.contains(&c), "unexpected byte {c}");
        }
    }
}
