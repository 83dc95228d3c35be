//! The storefront view machine.

use serde::{Deserialize, Serialize};
use swarna_auth::OtpChallenge;

/// Stage of the mock login flow, held inside the Login view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LoginStage {
    /// Entering a phone number.
    Phone,
    /// Entering the code for a pending challenge.
    OtpVerify(OtpChallenge),
}

/// The current storefront view.
///
/// One variant per screen, carrying only the selection state that is valid
/// for it, so invalid combinations (a sub-category detail without a
/// sub-category, say) cannot be represented. There is no history stack;
/// back edges are modeled explicitly per view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum View {
    /// The browse/search grid, with an optional quick category tab filter.
    Store { quick_filter: Option<String> },
    /// Top-level category list.
    Categories,
    /// Sub-categories of one category.
    SubCategoryList { category: String },
    /// Products of one sub-category.
    SubCategoryDetail {
        category: String,
        sub_category: String,
    },
    /// Cart review.
    Cart,
    /// Checkout screen.
    Checkout,
    /// Mock login flow.
    Login { stage: LoginStage },
    /// AI assistant page.
    Assistant,
}

impl View {
    /// The initial view: the store grid with no filter.
    pub fn store() -> Self {
        View::Store { quick_filter: None }
    }

    /// The login view at the phone-entry stage.
    pub fn login() -> Self {
        View::Login {
            stage: LoginStage::Phone,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            View::Store { .. } => "store",
            View::Categories => "categories",
            View::SubCategoryList { .. } => "sub_category_list",
            View::SubCategoryDetail { .. } => "sub_category_detail",
            View::Cart => "cart",
            View::Checkout => "checkout",
            View::Login { .. } => "login",
            View::Assistant => "assistant",
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::store()
    }
}
