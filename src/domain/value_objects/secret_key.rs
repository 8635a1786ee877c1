//! Session/signing secret generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::Rng;

const SECRET_KEY_BYTES: usize = 32;

/// Generate a URL-safe random secret (32 bytes of entropy, 43 characters).
pub fn generate_secret_key() -> String {
    let mut bytes = [0u8; SECRET_KEY_BYTES];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
