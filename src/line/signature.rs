// src/line/signature.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Line-Signature";

/// base64(HMAC-SHA256(channel secret, raw body)), as LINE computes it.
#[cfg(test)]
pub fn sign_body(channel_secret: &str, body: &[u8]) -> anyhow::Result<String> {
    use anyhow::Context;

    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .context("Failed to initialise HMAC")?;
    mac.update(body);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Constant-time check of a received signature against the raw body.
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(channel_secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "channel-secret";
    const BODY: &[u8] = br#"{"destination":"U1","events":[]}"#;

    #[test]
    fn test_signed_body_verifies() {
        let signature = sign_body(SECRET, BODY).unwrap();
        assert!(verify_signature(SECRET, BODY, &signature));
    }

    #[test]
    fn test_wrong_secret_or_body_rejected() {
        let signature = sign_body(SECRET, BODY).unwrap();
        assert!(!verify_signature("other-secret", BODY, &signature));
        assert!(!verify_signature(SECRET, b"{}", &signature));
    }

    #[test]
    fn test_garbage_signature_rejected() {
        assert!(!verify_signature(SECRET, BODY, "not base64 !!"));
        assert!(!verify_signature(SECRET, BODY, ""));
    }
}
