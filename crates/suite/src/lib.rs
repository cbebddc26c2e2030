//! Scenario catalog for the storefront end-to-end suite.
//!
//! Scenarios run strictly sequentially against one shared browser session,
//! so registration order matters: authenticated flows are grouped in the
//! middle of the run and the logged-out wishlist redirect goes last, after
//! everything that depends on an authenticated session.
//!
//! Pending entries are registered but skipped; each carries the reason it
//! is not yet reliable enough to gate a run on.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart_page;
pub mod home;
pub mod listings;
pub mod product_detail;
pub mod wishlist_page;

use storefront_e2e_harness::{Precondition, Scenario};

/// All registered scenarios, in execution order.
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    use Precondition::{Anything, LoggedIn, LoggedOut};

    vec![
        // Anonymous browsing.
        Scenario::new("home_page_loads_with_hero", Anything, |s| {
            Box::pin(home::page_loads_with_hero(s))
        }),
        Scenario::new("home_featured_products_grid", Anything, |s| {
            Box::pin(home::featured_products_grid(s))
        }),
        Scenario::new("home_categories_grid", Anything, |s| {
            Box::pin(home::categories_grid(s))
        }),
        Scenario::new("home_product_card_navigates_to_detail", Anything, |s| {
            Box::pin(home::product_card_navigates_to_detail(s))
        }),
        Scenario::new("home_category_card_navigates_to_listings", Anything, |s| {
            Box::pin(home::category_card_navigates_to_listings(s))
        }),
        Scenario::new("home_hero_cta_navigates_to_listings", Anything, |s| {
            Box::pin(home::hero_cta_navigates_to_listings(s))
        }),
        Scenario::new("home_featured_link_href_matches_destination", Anything, |s| {
            Box::pin(home::featured_link_href_matches_destination(s))
        }),
        Scenario::new("home_view_all_products_link", Anything, |s| {
            Box::pin(home::view_all_products_link(s))
        }),
        Scenario::pending(
            "home_recommendations_for_logged_in_user",
            LoggedIn,
            "Login/logout functionality might need specific element adjustments",
            |s| Box::pin(home::recommendations_for_logged_in_user(s)),
        ),
        Scenario::pending(
            "home_recommendations_for_logged_out_user",
            LoggedOut,
            "Login/logout functionality might need specific element adjustments",
            |s| Box::pin(home::recommendations_for_logged_out_user(s)),
        ),
        Scenario::new("listings_page_loads_with_search_controls", Anything, |s| {
            Box::pin(listings::page_loads_with_search_controls(s))
        }),
        Scenario::new("listings_product_grid_renders", Anything, |s| {
            Box::pin(listings::product_grid_renders(s))
        }),
        Scenario::new("listings_search_filters_results", Anything, |s| {
            Box::pin(listings::search_filters_results(s))
        }),
        Scenario::new("listings_filter_panel_narrows_results", Anything, |s| {
            Box::pin(listings::filter_panel_narrows_results(s))
        }),
        Scenario::new("listings_pagination_round_trip", Anything, |s| {
            Box::pin(listings::pagination_round_trip(s))
        }),
        Scenario::new("product_detail_page_loads", Anything, |s| {
            Box::pin(product_detail::page_loads(s))
        }),
        Scenario::new("product_detail_thumbnails_switch_main_image", Anything, |s| {
            Box::pin(product_detail::thumbnails_switch_main_image(s))
        }),
        Scenario::new("product_detail_unknown_product_shows_error", Anything, |s| {
            Box::pin(product_detail::unknown_product_shows_error(s))
        }),
        Scenario::new("product_detail_share_copies_link", Anything, |s| {
            Box::pin(product_detail::share_copies_link(s))
        }),
        // Authentication round trips.
        Scenario::new("auth_login_then_logout", LoggedOut, |s| {
            Box::pin(auth::login_then_logout(s))
        }),
        Scenario::new("auth_rejects_wrong_password", LoggedOut, |s| {
            Box::pin(auth::rejects_wrong_password(s))
        }),
        Scenario::new("auth_rejects_unregistered_email", LoggedOut, |s| {
            Box::pin(auth::rejects_unregistered_email(s))
        }),
        // Authenticated flows.
        Scenario::new("product_detail_add_to_cart_shows_toast", LoggedIn, |s| {
            Box::pin(product_detail::add_to_cart_shows_toast(s))
        }),
        Scenario::new("product_detail_add_to_cart_with_options", LoggedIn, |s| {
            Box::pin(product_detail::add_to_cart_with_options(s))
        }),
        Scenario::new("product_detail_wishlist_toggle_round_trip", LoggedIn, |s| {
            Box::pin(product_detail::wishlist_toggle_round_trip(s))
        }),
        Scenario::new("cart_page_loads", LoggedIn, |s| {
            Box::pin(cart_page::page_loads(s))
        }),
        Scenario::new("cart_cleared_cart_shows_empty_state", LoggedIn, |s| {
            Box::pin(cart_page::cleared_cart_shows_empty_state(s))
        }),
        Scenario::new("cart_line_details_and_summary_render", LoggedIn, |s| {
            Box::pin(cart_page::line_details_and_summary_render(s))
        }),
        Scenario::new("cart_quantity_update_shows_toast", LoggedIn, |s| {
            Box::pin(cart_page::quantity_update_shows_toast(s))
        }),
        Scenario::new("cart_item_removal_shows_toast_and_empty_state", LoggedIn, |s| {
            Box::pin(cart_page::item_removal_shows_toast_and_empty_state(s))
        }),
        Scenario::new("cart_checkout_button_navigates", LoggedIn, |s| {
            Box::pin(cart_page::checkout_button_navigates(s))
        }),
        Scenario::new("cart_add_then_clear_reaches_empty_state", LoggedIn, |s| {
            Box::pin(cart_page::add_then_clear_reaches_empty_state(s))
        }),
        Scenario::new("cart_add_raises_subtotal_from_zero", LoggedIn, |s| {
            Box::pin(cart_page::add_raises_subtotal_from_zero(s))
        }),
        Scenario::new("cart_quantity_update_for_absent_product_is_refused", LoggedIn, |s| {
            Box::pin(cart_page::quantity_update_for_absent_product_is_refused(s))
        }),
        Scenario::new("cart_removed_product_is_not_found_on_requery", LoggedIn, |s| {
            Box::pin(cart_page::removed_product_is_not_found_on_requery(s))
        }),
        Scenario::pending(
            "cart_prepared_cart_shows_items_and_checkout",
            LoggedIn,
            "Requires reliable login, add to cart, and clear cart functionality",
            |s| Box::pin(cart_page::prepared_cart_shows_items_and_checkout(s)),
        ),
        Scenario::pending(
            "cart_prepared_empty_cart_hides_checkout",
            LoggedIn,
            "Requires reliable login and clear cart functionality",
            |s| Box::pin(cart_page::prepared_empty_cart_hides_checkout(s)),
        ),
        Scenario::pending(
            "cart_quantity_update_recomputes_summary",
            LoggedIn,
            "Requires cart_setup and reliable quantity update",
            |s| Box::pin(cart_page::quantity_update_recomputes_summary(s)),
        ),
        Scenario::pending(
            "cart_removal_recomputes_summary",
            LoggedIn,
            "Requires cart_setup and reliable item removal",
            |s| Box::pin(cart_page::removal_recomputes_summary(s)),
        ),
        Scenario::pending(
            "cart_multi_item_summary_calculation",
            LoggedIn,
            "Requires adding multiple items and price checking",
            |s| Box::pin(cart_page::multi_item_summary_calculation(s)),
        ),
        Scenario::pending(
            "cart_proceed_to_checkout_shows_shipping_form",
            LoggedIn,
            "Requires cart_setup",
            |s| Box::pin(cart_page::proceed_to_checkout_shows_shipping_form(s)),
        ),
        Scenario::new("wishlist_page_loads_with_items", LoggedIn, |s| {
            Box::pin(wishlist_page::page_loads_with_items(s))
        }),
        Scenario::new("wishlist_remove_item_updates_list", LoggedIn, |s| {
            Box::pin(wishlist_page::remove_item_updates_list(s))
        }),
        Scenario::new("wishlist_entry_link_navigates_to_detail", LoggedIn, |s| {
            Box::pin(wishlist_page::entry_link_navigates_to_detail(s))
        }),
        Scenario::new("wishlist_add_is_idempotent", LoggedIn, |s| {
            Box::pin(wishlist_page::add_is_idempotent(s))
        }),
        Scenario::new("wishlist_empty_state_shows_browse_link", LoggedIn, |s| {
            Box::pin(wishlist_page::empty_state_shows_browse_link(s))
        }),
        // Runs last: leaves the session logged out.
        Scenario::new("wishlist_redirects_to_login_when_logged_out", LoggedOut, |s| {
            Box::pin(wishlist_page::redirects_to_login_when_logged_out(s))
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_names_are_unique() {
        let all = scenarios();
        let mut names: Vec<_> = all.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_logged_out_redirect_runs_last() {
        let all = scenarios();
        let last = all.last().map(|s| s.name);
        assert_eq!(last, Some("wishlist_redirects_to_login_when_logged_out"));
    }

    #[test]
    fn test_pending_scenarios_carry_reasons() {
        for scenario in scenarios() {
            if let Some(reason) = scenario.skip {
                assert!(!reason.is_empty(), "{} has an empty skip reason", scenario.name);
            }
        }
    }
}
