//! The logged-in shopper identity.

use serde::{Deserialize, Serialize};

/// A shopper who completed the OTP flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shopper {
    /// Verified phone number (10 digits).
    pub phone: String,
    /// Unix timestamp of verification.
    pub verified_at: i64,
}

impl Shopper {
    /// Create a shopper verified now.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            verified_at: current_timestamp(),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
