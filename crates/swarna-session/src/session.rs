//! The owned session object and its intent handler.

use serde::{Deserialize, Serialize};
use swarna_auth::{OtpChallenge, Shopper};
use swarna_commerce::cart::Cart;
use swarna_commerce::catalog::{Catalog, Product};
use swarna_commerce::ids::SessionId;
use swarna_commerce::money::Money;
use swarna_commerce::search::ProductFilter;

use crate::checkout::{place_order, OrderReceipt};
use crate::intent::{Intent, Page};
use crate::view::{LoginStage, View};

/// One browser-tab-lifetime storefront session.
///
/// Owns the catalog (read-only), the cart, the search text, and the
/// current view. State changes only through [`StoreSession::apply`]; the
/// rendering layer re-reads everything after each intent. Nothing here
/// survives the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSession {
    id: SessionId,
    catalog: Catalog,
    cart: Cart,
    search: String,
    view: View,
    pending_confirmation: Option<Product>,
    shopper: Option<Shopper>,
    last_order: Option<OrderReceipt>,
}

impl StoreSession {
    /// Start a session over a catalog. Initial view is the store grid.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            id: SessionId::generate(),
            catalog,
            cart: Cart::new(),
            search: String::new(),
            view: View::store(),
            pending_confirmation: None,
            shopper: None,
            last_order: None,
        }
    }

    /// Start a session over the compiled-in store catalog.
    pub fn with_seed_catalog() -> Self {
        Self::new(Catalog::seed())
    }

    /// Apply a user intent.
    ///
    /// Synchronous and total: every intent yields a valid next state, and
    /// intents that make no sense for the current view (or name an unknown
    /// product) are silently ignored.
    pub fn apply(&mut self, intent: Intent) {
        tracing::debug!(view = self.view.name(), intent = ?intent, "applying intent");
        match intent {
            Intent::Search(text) => {
                self.search = text;
            }
            Intent::SelectCategory(category) => {
                // Quick tab: always lands on the store grid, dropping any
                // sub-category selection.
                self.view = View::Store {
                    quick_filter: category,
                };
            }
            Intent::BrowseCategories => {
                self.view = View::Categories;
            }
            Intent::OpenCategory(category) => {
                if self.view == View::Categories {
                    self.view = View::SubCategoryList { category };
                }
            }
            Intent::SelectSubCategory(Some(sub_category)) => {
                if let View::SubCategoryList { category }
                | View::SubCategoryDetail { category, .. } = &self.view
                {
                    self.view = View::SubCategoryDetail {
                        category: category.clone(),
                        sub_category,
                    };
                }
            }
            Intent::SelectSubCategory(None) => {
                if let View::SubCategoryDetail { category, .. } = &self.view {
                    self.view = View::SubCategoryList {
                        category: category.clone(),
                    };
                }
            }
            Intent::Back => {
                self.view = match &self.view {
                    View::SubCategoryDetail { category, .. } => View::SubCategoryList {
                        category: category.clone(),
                    },
                    View::SubCategoryList { .. } => View::Categories,
                    View::Login {
                        stage: LoginStage::OtpVerify(_),
                    } => View::login(),
                    other => other.clone(),
                };
            }
            Intent::Navigate(page) => {
                self.view = match page {
                    Page::Store => View::store(),
                    Page::Cart => View::Cart,
                    Page::Checkout => View::Checkout,
                    Page::Login => View::login(),
                    Page::Assistant => View::Assistant,
                };
            }
            Intent::AddToCart(id) => {
                if let Some(product) = self.catalog.product(&id) {
                    self.cart.add(product);
                    self.pending_confirmation = Some(product.clone());
                }
            }
            Intent::BuyNow(id) => {
                // Compound transition: cart mutation plus navigation, with
                // the confirmation overlay bypassed.
                if let Some(product) = self.catalog.product(&id) {
                    self.cart.add(product);
                    self.view = View::Checkout;
                }
            }
            Intent::UpdateQuantity(id, delta) => {
                self.cart.update_quantity(&id, delta);
            }
            Intent::RemoveFromCart(id) => {
                self.cart.remove(&id);
            }
            Intent::DismissConfirmation => {
                self.pending_confirmation = None;
            }
            Intent::ConfirmationViewCart => {
                self.pending_confirmation = None;
                self.view = View::Cart;
            }
            Intent::ConfirmationCheckout => {
                self.pending_confirmation = None;
                self.view = View::Checkout;
            }
            Intent::SubmitPhone(phone) => {
                if matches!(self.view, View::Login { .. }) {
                    match OtpChallenge::issue(phone) {
                        Ok(challenge) => {
                            self.view = View::Login {
                                stage: LoginStage::OtpVerify(challenge),
                            };
                        }
                        Err(err) => {
                            tracing::warn!(%err, "rejected phone number");
                        }
                    }
                }
            }
            Intent::VerifyOtp(code) => {
                let challenge = match &self.view {
                    View::Login {
                        stage: LoginStage::OtpVerify(challenge),
                    } => challenge.clone(),
                    _ => return,
                };
                match challenge.verify(&code) {
                    Ok(shopper) => {
                        self.shopper = Some(shopper);
                        self.view = View::store();
                    }
                    Err(swarna_auth::AuthError::CodeExpired) => {
                        tracing::warn!("otp challenge expired, restarting login");
                        self.view = View::login();
                    }
                    Err(err) => {
                        tracing::warn!(%err, "otp verification failed");
                    }
                }
            }
            Intent::CheckoutPay => {
                self.last_order = Some(place_order(&self.cart));
            }
        }
    }

    /// Session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Current header search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Products visible in the current view, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.current_filter().apply(self.catalog.products())
    }

    /// Sub-categories to list for the current view's category, if any.
    pub fn sub_categories(&self) -> &[String] {
        match &self.view {
            View::SubCategoryList { category } | View::SubCategoryDetail { category, .. } => {
                self.catalog.categories().sub_categories(category)
            }
            _ => &[],
        }
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart total, derived fresh.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Cart badge count (sum of quantities).
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// The just-added product awaiting confirmation, if any.
    pub fn pending_confirmation(&self) -> Option<&Product> {
        self.pending_confirmation.as_ref()
    }

    /// The logged-in shopper, if the OTP flow completed.
    pub fn shopper(&self) -> Option<&Shopper> {
        self.shopper.as_ref()
    }

    /// The most recent order receipt, if any.
    pub fn last_order(&self) -> Option<&OrderReceipt> {
        self.last_order.as_ref()
    }

    /// Derive the filter inputs from the current view plus search text.
    fn current_filter(&self) -> ProductFilter {
        let filter = ProductFilter::all().with_search(self.search.clone());
        match &self.view {
            View::Store {
                quick_filter: Some(category),
            } => filter.with_category(category.clone()),
            View::SubCategoryList { category } => filter.with_category(category.clone()),
            View::SubCategoryDetail {
                category,
                sub_category,
            } => filter
                .with_category(category.clone())
                .with_sub_category(sub_category.clone()),
            _ => filter,
        }
    }
}

impl Default for StoreSession {
    fn default() -> Self {
        Self::with_seed_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StoreSession {
        StoreSession::with_seed_catalog()
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.view(), &View::store());
        assert!(session.cart().is_empty());
        assert!(session.pending_confirmation().is_none());
        assert!(session.shopper().is_none());
        assert_eq!(session.visible_products().len(), session.catalog().len());
    }

    #[test]
    fn test_search_narrows_store_grid() {
        let mut session = session();
        session.apply(Intent::Search("murukku".into()));
        let ids: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["v2", "v3"]);
    }

    #[test]
    fn test_quick_tab_filters_and_returns_to_store() {
        let mut session = session();
        session.apply(Intent::Navigate(Page::Cart));
        session.apply(Intent::SelectCategory(Some("Pickles".into())));

        assert_eq!(
            session.view(),
            &View::Store {
                quick_filter: Some("Pickles".into())
            }
        );
        let ids: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["p1"]);

        // The "All" tab clears the filter.
        session.apply(Intent::SelectCategory(None));
        assert_eq!(session.view(), &View::store());
        assert_eq!(session.visible_products().len(), 9);
    }

    #[test]
    fn test_category_browse_flow() {
        let mut session = session();
        session.apply(Intent::BrowseCategories);
        assert_eq!(session.view(), &View::Categories);

        session.apply(Intent::OpenCategory("Sweets".into()));
        assert_eq!(
            session.view(),
            &View::SubCategoryList {
                category: "Sweets".into()
            }
        );
        assert_eq!(session.sub_categories().len(), 5);

        session.apply(Intent::SelectSubCategory(Some("Kaju Sweets".into())));
        assert_eq!(
            session.view(),
            &View::SubCategoryDetail {
                category: "Sweets".into(),
                sub_category: "Kaju Sweets".into(),
            }
        );
    }

    #[test]
    fn test_kaju_browse_search_yields_single_match() {
        // selectCategory("Sweets"), selectSubCategory("Kaju Sweets"),
        // search("kaju") yields exactly s3.
        let mut session = session();
        session.apply(Intent::BrowseCategories);
        session.apply(Intent::OpenCategory("Sweets".into()));
        session.apply(Intent::SelectSubCategory(Some("Kaju Sweets".into())));
        session.apply(Intent::Search("kaju".into()));

        let ids: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["s3"]);
    }

    #[test]
    fn test_back_edges() {
        let mut session = session();
        session.apply(Intent::BrowseCategories);
        session.apply(Intent::OpenCategory("Snacks".into()));
        session.apply(Intent::SelectSubCategory(Some("Thukkada".into())));

        session.apply(Intent::Back);
        assert_eq!(
            session.view(),
            &View::SubCategoryList {
                category: "Snacks".into()
            }
        );

        session.apply(Intent::Back);
        assert_eq!(session.view(), &View::Categories);

        // No further back edge from the category list's parent.
        session.apply(Intent::Back);
        assert_eq!(session.view(), &View::Categories);
    }

    #[test]
    fn test_clearing_sub_category_returns_to_list() {
        let mut session = session();
        session.apply(Intent::BrowseCategories);
        session.apply(Intent::OpenCategory("Snacks".into()));
        session.apply(Intent::SelectSubCategory(Some("Thukkada".into())));
        session.apply(Intent::SelectSubCategory(None));
        assert_eq!(
            session.view(),
            &View::SubCategoryList {
                category: "Snacks".into()
            }
        );
    }

    #[test]
    fn test_open_category_outside_category_list_is_noop() {
        let mut session = session();
        session.apply(Intent::OpenCategory("Sweets".into()));
        assert_eq!(session.view(), &View::store());
    }

    #[test]
    fn test_sub_category_list_falls_back_to_other() {
        let mut session = session();
        session.apply(Intent::BrowseCategories);
        session.apply(Intent::OpenCategory("Hampers".into()));
        assert_eq!(
            session.sub_categories(),
            ["Vadaam", "Podies", "Makhana", "Cookies", "Vathal", "Chocolates"]
        );
    }

    #[test]
    fn test_direct_jumps() {
        let mut session = session();
        for (page, view) in [
            (Page::Cart, View::Cart),
            (Page::Checkout, View::Checkout),
            (Page::Assistant, View::Assistant),
            (Page::Login, View::login()),
            (Page::Store, View::store()),
        ] {
            session.apply(Intent::Navigate(page));
            assert_eq!(session.view(), &view);
        }
    }

    #[test]
    fn test_add_to_cart_sets_confirmation() {
        let mut session = session();
        session.apply(Intent::AddToCart("s1".into()));

        assert_eq!(session.cart_count(), 1);
        let pending = session.pending_confirmation().unwrap();
        assert_eq!(pending.id.as_str(), "s1");
        // The overlay does not change the view.
        assert_eq!(session.view(), &View::store());

        session.apply(Intent::DismissConfirmation);
        assert!(session.pending_confirmation().is_none());
        assert_eq!(session.view(), &View::store());
    }

    #[test]
    fn test_confirmation_view_cart_and_checkout() {
        let mut session = session();
        session.apply(Intent::AddToCart("s1".into()));
        session.apply(Intent::ConfirmationViewCart);
        assert!(session.pending_confirmation().is_none());
        assert_eq!(session.view(), &View::Cart);

        session.apply(Intent::AddToCart("s2".into()));
        session.apply(Intent::ConfirmationCheckout);
        assert!(session.pending_confirmation().is_none());
        assert_eq!(session.view(), &View::Checkout);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut session = session();
        session.apply(Intent::AddToCart("ghost".into()));
        assert!(session.cart().is_empty());
        assert!(session.pending_confirmation().is_none());
    }

    #[test]
    fn test_buy_now_goes_straight_to_checkout() {
        // buyNow(s3) from Store: checkout with s3 at quantity 1, no marker.
        let mut session = session();
        session.apply(Intent::BuyNow("s3".into()));

        assert_eq!(session.view(), &View::Checkout);
        assert_eq!(session.cart().get(&"s3".into()).unwrap().quantity, 1);
        assert!(session.pending_confirmation().is_none());
    }

    #[test]
    fn test_buy_now_unknown_product_is_noop() {
        let mut session = session();
        session.apply(Intent::BuyNow("ghost".into()));
        assert_eq!(session.view(), &View::store());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_cart_totals_through_intents() {
        let mut session = session();
        session.apply(Intent::AddToCart("s1".into()));
        session.apply(Intent::AddToCart("s2".into()));
        session.apply(Intent::AddToCart("s1".into()));

        assert_eq!(session.cart_total(), Money::from_rupees(1200));
        assert_eq!(session.cart_count(), 3);

        session.apply(Intent::UpdateQuantity("s2".into(), -5));
        assert_eq!(session.cart().get(&"s2".into()).unwrap().quantity, 1);

        session.apply(Intent::RemoveFromCart("s2".into()));
        session.apply(Intent::RemoveFromCart("s2".into()));
        assert_eq!(session.cart_total(), Money::from_rupees(950));
    }

    #[test]
    fn test_login_flow() {
        let mut session = session();
        session.apply(Intent::Navigate(Page::Login));
        session.apply(Intent::SubmitPhone("73959 43676".into()));

        let code = match session.view() {
            View::Login {
                stage: LoginStage::OtpVerify(challenge),
            } => challenge.code().to_string(),
            other => panic!("expected otp stage, got {:?}", other),
        };

        // A wrong code keeps the challenge open.
        session.apply(Intent::VerifyOtp("xxxxxx".into()));
        assert!(matches!(
            session.view(),
            View::Login {
                stage: LoginStage::OtpVerify(_)
            }
        ));
        assert!(session.shopper().is_none());

        session.apply(Intent::VerifyOtp(code));
        assert_eq!(session.view(), &View::store());
        assert_eq!(session.shopper().unwrap().phone, "7395943676");
    }

    #[test]
    fn test_invalid_phone_stays_on_phone_stage() {
        let mut session = session();
        session.apply(Intent::Navigate(Page::Login));
        session.apply(Intent::SubmitPhone("12".into()));
        assert_eq!(session.view(), &View::login());
    }

    #[test]
    fn test_login_intents_outside_login_view_are_noops() {
        let mut session = session();
        session.apply(Intent::SubmitPhone("7395943676".into()));
        session.apply(Intent::VerifyOtp("123456".into()));
        assert_eq!(session.view(), &View::store());
        assert!(session.shopper().is_none());
    }

    #[test]
    fn test_checkout_pay_records_receipt_without_side_effects() {
        let mut session = session();
        session.apply(Intent::BuyNow("s1".into()));
        session.apply(Intent::CheckoutPay);

        let receipt = session.last_order().unwrap();
        assert_eq!(receipt.total, Money::from_rupees(475));
        assert_eq!(receipt.item_count, 1);
        // The stub changes neither the view nor the cart.
        assert_eq!(session.view(), &View::Checkout);
        assert_eq!(session.cart_count(), 1);
    }

    #[test]
    fn test_search_persists_across_views() {
        let mut session = session();
        session.apply(Intent::Search("pakoda".into()));
        session.apply(Intent::Navigate(Page::Cart));
        session.apply(Intent::Navigate(Page::Store));

        let ids: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["sn2"]);
    }

    #[test]
    fn test_state_serializes_for_rendering() {
        let mut session = session();
        session.apply(Intent::AddToCart("s1".into()));

        let snapshot = serde_json::to_value(&session).unwrap();
        assert_eq!(snapshot["view"]["Store"]["quick_filter"], serde_json::Value::Null);
        assert_eq!(snapshot["search"], "");
        assert!(snapshot["pending_confirmation"].is_object());
    }
}
