use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;
const SEPARATOR: char = '$';

/// Hashes `password` with a fresh random salt as `salt$digest` (base64).
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    encode(&salt, password)
}

pub fn verify_password(password: &str, hashed: &str) -> bool {
    let Some((salt, _)) = hashed.split_once(SEPARATOR) else {
        return false;
    };
    match STANDARD.decode(salt) {
        Ok(salt) => encode(&salt, password) == hashed,
        Err(_) => false,
    }
}

fn encode(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    format!("{}{}{}", STANDARD.encode(salt), SEPARATOR, STANDARD.encode(digest))
}
