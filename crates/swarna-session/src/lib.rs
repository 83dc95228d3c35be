//! Session state and view machine for the Swarnapakshi storefront.
//!
//! A [`StoreSession`] owns the catalog, the cart, and the current view for
//! one browser-tab-lifetime session. The rendering layer feeds it
//! [`Intent`]s and reads the resulting state back; every transition is
//! synchronous, deterministic, and total.
//!
//! ```rust
//! use swarna_session::{Intent, StoreSession, View};
//!
//! let mut session = StoreSession::with_seed_catalog();
//! session.apply(Intent::BuyNow("s3".into()));
//!
//! assert_eq!(session.view(), &View::Checkout);
//! assert_eq!(session.cart_count(), 1);
//! assert!(session.pending_confirmation().is_none());
//! ```

mod checkout;
mod intent;
mod session;
mod view;

pub use checkout::OrderReceipt;
pub use intent::{Intent, Page};
pub use session::StoreSession;
pub use view::{LoginStage, View};
