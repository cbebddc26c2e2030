//! Structural locators for the storefront pages.
//!
//! Grouped by page, matching the application's rendered markup. The suite
//! treats the application purely as a source of renderable state located by
//! these selectors; it does not validate the application's own API.

/// Shared page chrome.
pub mod chrome {
    pub const HEADER: &str = "header";
}

/// Navigation and authentication surface.
pub mod nav {
    /// Authenticated-only marker.
    pub const USER_MENU_BUTTON: &str = "button[aria-label='Open user menu']";
    /// Unauthenticated-only marker.
    pub const LOGIN_LINK: &str = "a[href='/login']";
    pub const EMAIL_INPUT: &str = "#email";
    pub const PASSWORD_INPUT: &str = "#password";
    /// XPath: the login form submit button.
    pub const LOGIN_SUBMIT_XPATH: &str = "//button[contains(text(), 'Login')]";
    /// XPath: the user-menu logout entry.
    pub const LOGOUT_BUTTON_XPATH: &str = "//button[contains(text(), 'Logout')]";
}

/// Home page.
pub mod home {
    pub const HERO_SECTION: &str = "section.relative.h-\\[600px\\]";
    pub const HERO_TITLE: &str = "h1.text-4xl.font-bold.text-white";
    pub const HERO_DESCRIPTION: &str = "p.text-lg.text-white\\/90";
    pub const HERO_BUTTON: &str = "a.bg-white\\/10";
    pub const FEATURED_SECTION: &str = "section.py-16.bg-zinc-50";
    pub const FEATURED_TITLE: &str = "h2.text-3xl.font-bold.text-\\[\\#0064B1\\]";
    pub const PRODUCTS_GRID: &str =
        "div.grid.grid-cols-1.sm\\:grid-cols-2.lg\\:grid-cols-3.xl\\:grid-cols-4.gap-6";
    pub const PRODUCT_CARD: &str = "div.bg-white.rounded-lg.shadow.overflow-hidden";
    pub const PRODUCT_CARD_IMAGE: &str = "div.relative.aspect-square img";
    pub const PRODUCT_CARD_TITLE: &str = "h3.text-lg.font-medium.text-gray-900";
    pub const PRODUCT_CARD_TITLE_LINK: &str = "h3.text-lg.font-medium.text-gray-900 a";
    pub const PRODUCT_CARD_PRICE: &str = "p.text-lg.font-semibold.text-\\[\\#0064B1\\]";
    pub const PRODUCT_CARD_CATEGORY: &str = "p.text-sm.text-gray-500";
    pub const CATEGORY_CARD: &str = "a.group.block.overflow-hidden.rounded-lg.shadow-md";
    pub const CATEGORY_IMAGE: &str = "div.relative.h-48.overflow-hidden img";
    pub const CATEGORY_TITLE: &str = "h3.text-white.font-bold.text-xl";
    /// XPath: the "View All Products" call to action.
    pub const VIEW_ALL_XPATH: &str = "//a[contains(., 'View All Products')]";
}

/// Product listings page.
pub mod listings {
    pub const PAGE_TITLE: &str = "h1.text-4xl.font-bold.text-\\[\\#0064B1\\]";
    pub const SEARCH_INPUT: &str = "input[placeholder='Search products...']";
    pub const SEARCH_BUTTON: &str = "button.bg-\\[\\#0064B1\\]";
    pub const FILTER_BUTTON: &str = "button:has(svg.h-4.w-4)";
    pub const FILTER_PANEL: &str = "div.bg-white.p-4.rounded-lg.shadow-sm";
    /// Matches on the select's current value, so only valid pre-filtering.
    pub const CATEGORY_FILTER: &str = "select[value='all']";
    pub const SORT_SELECT: &str = "select[value='newest']";
    pub const OPTION_BADGES: &str = "div.flex.flex-wrap.gap-2 span";
    pub const PRICE_FILTER_INPUTS: &str = "div.flex.gap-2 input";
    pub const RESULTS_INFO: &str = "p.text-sm.text-zinc-600";
    pub const PAGINATION: &str = "div.flex.justify-center.items-center.gap-2";
    pub const PAGINATION_TEXT: &str = "span.text-sm";
    pub const PAGINATION_PREV: &str =
        "div.flex.justify-center.items-center.gap-2 button:has(svg.h-4.w-4):first-child";
    pub const PAGINATION_NEXT: &str =
        "div.flex.justify-center.items-center.gap-2 button:has(svg.h-4.w-4):last-child";
    pub const LOADING_SKELETON: &str = "div.animate-pulse.bg-gray-200.rounded-lg.aspect-square";
}

/// Product detail page.
pub mod product {
    pub const IMAGES_SECTION: &str = "div.space-y-4";
    pub const MAIN_IMAGE: &str = "div.relative.aspect-square.overflow-hidden.rounded-lg img";
    pub const THUMBNAILS: &str = "div.grid.grid-cols-4.gap-4 button";
    pub const TITLE: &str = "h1.text-2xl.font-semibold.text-zinc-900";
    pub const CATEGORY: &str = "p.text-zinc-500";
    pub const PRICE: &str = "span.text-3xl.font-bold.text-\\[\\#0064B1\\]";
    pub const RATING: &str = "div.flex.items-center.gap-2";
    pub const STARS: &str = "svg.w-5.h-5";
    pub const REVIEW_COUNT: &str = "span.text-zinc-600";
    /// XPath: the add-to-cart action.
    pub const ADD_TO_CART_XPATH: &str = "//button[contains(., 'Add to Cart')]";
    /// Matches the toggle in either membership state.
    pub const WISHLIST_TOGGLE: &str =
        "button[aria-label='Add to wishlist'], button[aria-label='Remove from wishlist']";
    pub const SHARE_BUTTON: &str = "button:has(svg.h-4.w-4)";
    pub const LOADING_SKELETON: &str = "div.animate-pulse.bg-gray-200.rounded-lg";
    pub const ERROR_HEADING: &str = "div.text-center h1.text-2xl.font-bold.text-red-600";
    pub const ERROR_DETAIL: &str = "p.text-zinc-600";
}

/// Cart page.
pub mod cart {
    pub const PAGE_TITLE: &str = "h1.text-3xl.font-bold";
    pub const ITEMS_CONTAINER: &str = "div.lg\\:col-span-2.space-y-4";
    pub const ITEM: &str = "div.bg-white.rounded-lg.shadow-sm.p-4.flex.gap-4";
    pub const ITEM_IMAGE: &str =
        "div.shrink-0.aspect-square.w-24.relative.rounded-md.overflow-hidden img";
    pub const ITEM_TITLE_LINK: &str = "a.font-medium.hover\\:text-\\[\\#0064B1\\]";
    pub const ITEM_CATEGORY: &str = "div.text-sm.text-zinc-600";
    pub const ITEM_PRICE: &str = "span.font-medium";
    pub const ITEM_QUANTITY: &str = "span.w-8.text-center";
    pub const ITEM_DECREASE: &str = "button:has(svg.h-4.w-4):first-child";
    pub const ITEM_INCREASE: &str = "button:has(svg.h-4.w-4):last-child";
    pub const ITEM_REMOVE: &str = "button:has(svg.h-4.w-4.mr-1)";
    pub const SUMMARY: &str = "div.bg-white.rounded-lg.shadow-sm.p-6";
    pub const SUMMARY_SUBTOTAL: &str = "div.space-y-4.mb-4 div:first-child span:last-child";
    pub const SUMMARY_SHIPPING: &str = "div.space-y-4.mb-4 div:nth-child(2) span:last-child";
    pub const SUMMARY_TAX: &str = "div.space-y-4.mb-4 div:nth-child(3) span:last-child";
    pub const SUMMARY_TOTAL: &str =
        "div.flex.justify-between.items-center.font-bold.text-xl.mb-4 span:last-child";
    pub const CHECKOUT_BUTTON: &str = "button.w-full";
    pub const EMPTY_MESSAGE: &str = "h1.text-2xl.font-bold";
    pub const CONTINUE_SHOPPING: &str = "a:has(button)";
    pub const LOADING_SPINNER: &str =
        "div.animate-spin.rounded-full.h-8.w-8.border-b-2.border-\\[\\#0064B1\\]";
}

/// Wishlist page.
pub mod wishlist {
    pub const PAGE_TITLE: &str = "h1.text-4xl.font-bold.text-\\[\\#0064B1\\]";
    pub const ITEMS_CONTAINER: &str = "div.bg-white.rounded-lg.shadow.overflow-hidden";
    pub const ITEM: &str = "div.flex.items-center.p-6";
    pub const ITEM_IMAGE: &str = "div.relative.h-24.w-24 img";
    pub const ITEM_TITLE_LINK: &str = "h3.text-lg.font-medium.text-gray-900 a";
    pub const ITEM_CATEGORY: &str = "p.mt-1.text-sm.text-gray-500";
    pub const ITEM_PRICE: &str = "p.text-lg.font-semibold.text-\\[\\#0064B1\\]";
    pub const ITEM_REMOVE: &str = "button[aria-label='Remove from wishlist']";
    pub const EMPTY_MESSAGE: &str = "h2.text-2xl.font-semibold.text-zinc-900";
    pub const BROWSE_PRODUCTS_LINK: &str = "a[href='/listings']";
    pub const LOADING_SPINNER: &str = "svg.h-8.w-8.animate-spin.text-\\[\\#0064B1\\]";
}

/// Toast notifications (sonner).
pub mod toast {
    /// Selector for a toast of the given severity (`success` or `error`).
    #[must_use]
    pub fn by_severity(severity: &str) -> String {
        format!("[data-sonner-toast][data-type='{severity}']")
    }
}

/// Path to a product detail page.
#[must_use]
pub fn product_path(product_id: &str) -> String {
    format!("/product/{product_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(product_path("1"), "/product/1");
        assert_eq!(product_path("abc"), "/product/abc");
    }

    #[test]
    fn test_toast_selector() {
        assert_eq!(
            toast::by_severity("success"),
            "[data-sonner-toast][data-type='success']"
        );
    }
}
