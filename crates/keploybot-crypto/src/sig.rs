//! Webhook signature verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{CryptoError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Hex-encoded HMAC-SHA256 signature, as sent by the hosting platform.
pub struct Signature<'a>(pub &'a str);

impl Signature<'_> {
    /// Check if the signature matches a payload, using a constant-time comparison.
    pub fn is_valid_payload(&self, body: &[u8], secret: &str) -> Result<bool> {
        let mut hmac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKey)?;
        hmac.update(body);

        let decoded_signature = match hex::decode(self.0) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };

        Ok(hmac.verify_slice(&decoded_signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;

    const SECRET: &str = "iamasecret";

    fn sign(body: &[u8], secret: &str) -> String {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let mut hmac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        hmac.update(body);
        hex::encode(hmac.finalize().into_bytes())
    }

    #[test]
    fn valid_signature() {
        let body = br#"{"zen": "Favor focus over features."}"#;
        let signature = sign(body, SECRET);

        assert!(Signature(&signature)
            .is_valid_payload(body, SECRET)
            .unwrap());
    }

    #[test]
    fn invalid_signature() {
        let body = br#"{"zen": "Favor focus over features."}"#;
        let signature = sign(body, "someothersecret");

        assert!(!Signature(&signature)
            .is_valid_payload(body, SECRET)
            .unwrap());
    }

    #[test]
    fn garbage_signature() {
        assert!(!Signature("not-even-hex")
            .is_valid_payload(b"body", SECRET)
            .unwrap());
    }
}
