//! User intents: everything the presentation layer can ask of a session.

use serde::{Deserialize, Serialize};
use swarna_commerce::ids::ProductId;

/// Direct navigation targets reachable from the header/menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Store,
    Cart,
    Checkout,
    Login,
    Assistant,
}

/// A user intent, applied via [`crate::StoreSession::apply`].
///
/// Every intent is accepted in every view; intents that make no sense for
/// the current view are silent no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Header search text changed.
    Search(String),
    /// Quick category tab: Some(name) filters the store grid, None is the
    /// "All" tab. Jumps to the store grid from any view.
    SelectCategory(Option<String>),
    /// The "Categories" tab: open the top-level category list.
    BrowseCategories,
    /// Open a category's sub-category list (from the category list).
    OpenCategory(String),
    /// Pick a sub-category (Some) or clear it back to the list (None).
    SelectSubCategory(Option<String>),
    /// Explicit per-view back edge.
    Back,
    /// Direct header/menu jump.
    Navigate(Page),
    /// Add one unit of a product, showing the confirmation overlay.
    AddToCart(ProductId),
    /// Add one unit bypassing confirmation and go straight to checkout.
    BuyNow(ProductId),
    /// Adjust a cart entry's quantity by a signed delta.
    UpdateQuantity(ProductId, i32),
    /// Remove a cart entry.
    RemoveFromCart(ProductId),
    /// Close the add-to-cart confirmation overlay.
    DismissConfirmation,
    /// "View cart" from the confirmation overlay.
    ConfirmationViewCart,
    /// "Checkout" from the confirmation overlay.
    ConfirmationCheckout,
    /// Submit a phone number on the login screen.
    SubmitPhone(String),
    /// Submit the entered OTP code.
    VerifyOtp(String),
    /// Pay on the checkout screen (stub, always succeeds).
    CheckoutPay,
}
