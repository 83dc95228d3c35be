//! One-time-password challenges.

use crate::error::AuthError;
use crate::user::Shopper;
use serde::{Deserialize, Serialize};

/// A pending OTP challenge for a phone number.
///
/// Mock end-to-end: the code is generated locally and exposed via
/// [`OtpChallenge::code`] so the demo UI can show it instead of sending an
/// SMS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OtpChallenge {
    /// Phone number being verified.
    pub phone: String,
    /// The 6-digit code.
    pub code: String,
    /// Unix timestamp of issuance.
    pub issued_at: i64,
    /// Unix timestamp after which the code no longer verifies.
    pub expires_at: i64,
}

impl OtpChallenge {
    /// Challenge lifetime: 5 minutes.
    pub const EXPIRY_SECS: i64 = 5 * 60;

    /// Issue a challenge for a phone number.
    ///
    /// The number must be a 10-digit mobile number; spaces and a leading
    /// "+91" are tolerated.
    pub fn issue(phone: impl Into<String>) -> Result<Self, AuthError> {
        let phone = phone.into();
        let digits = normalize_phone(&phone).ok_or_else(|| AuthError::InvalidPhone(phone))?;

        let code = generate_code();
        let now = current_timestamp();
        tracing::debug!(phone = %digits, "otp challenge issued");

        Ok(Self {
            phone: digits,
            code,
            issued_at: now,
            expires_at: now + Self::EXPIRY_SECS,
        })
    }

    /// The code a real system would deliver out of band.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Check if the challenge has expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Verify an entered code, producing the logged-in shopper on success.
    pub fn verify(&self, entered: &str) -> Result<Shopper, AuthError> {
        if self.is_expired() {
            return Err(AuthError::CodeExpired);
        }
        if entered.trim() != self.code {
            return Err(AuthError::CodeMismatch);
        }
        Ok(Shopper::new(self.phone.clone()))
    }
}

/// Reduce a phone number to its 10 digits, tolerating "+91" and spaces.
fn normalize_phone(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    let trimmed = trimmed.strip_prefix("+91").unwrap_or(trimmed);
    let digits: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

/// Generate a 6-digit code.
fn generate_code() -> String {
    use rand::Rng;
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:06}", n)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
