//! Mock login/OTP flow for the Swarnapakshi storefront.
//!
//! There is no real authentication backend: challenges are generated and
//! verified entirely in memory, and the code is surfaced to the caller so a
//! demo UI can display it. Nothing is sent anywhere.

mod error;
mod otp;
mod user;

pub use error::AuthError;
pub use otp::OtpChallenge;
pub use user::Shopper;
