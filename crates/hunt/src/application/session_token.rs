//! Signed Session Tokens
//!
//! The cookie value is `base64(session_id || hmac_sha256(secret, session_id))`.
//! A forged or truncated token verifies to `None`, never to an error.

use uuid::Uuid;

const TOKEN_LEN: usize = 16 + 32; // UUID + HMAC

/// Create a signed session token from a session id
pub fn sign(session_id: &Uuid, secret: &[u8; 32]) -> String {
    let id_bytes = session_id.as_bytes();
    let signature = platform::crypto::hmac_sha256(secret, id_bytes);
    let mut token_data = Vec::with_capacity(TOKEN_LEN);
    token_data.extend_from_slice(id_bytes);
    token_data.extend_from_slice(&signature);
    platform::crypto::to_base64(&token_data)
}

/// Verify a token and extract the session id
pub fn verify(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let token_data = platform::crypto::from_base64(token).ok()?;
    if token_data.len() != TOKEN_LEN {
        return None;
    }

    let id_bytes: [u8; 16] = token_data[0..16].try_into().ok()?;
    let provided_signature = &token_data[16..];
    let expected_signature = platform::crypto::hmac_sha256(secret, &id_bytes);

    // Constant-time comparison
    if !platform::crypto::constant_time_eq(provided_signature, &expected_signature) {
        return None;
    }

    Some(Uuid::from_bytes(id_bytes))
}
