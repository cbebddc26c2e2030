//! Wishlist page scenarios, plus the unauthenticated redirect. The
//! redirect scenario runs logged out and is registered last so it cannot
//! disturb authenticated state mid-suite.

use storefront_e2e_harness::selectors::wishlist as sel;
use storefront_e2e_harness::{
    Result, Session, Severity, ToggleOutcome, Wishlist, expect_toast, verify, wait,
};
use thirtyfour::prelude::*;

pub async fn page_loads_with_items(session: &mut Session) -> Result<()> {
    let wishlist = Wishlist::new(session);
    wishlist.add("2").await?;
    wishlist.open().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    let title = wait::visible(driver, sel::PAGE_TITLE, timeout).await?.text().await?;
    verify!(title.contains("Wishlist"), "unexpected wishlist heading: {title}");

    let item = wait::visible(driver, sel::ITEM, timeout).await?;
    item.find(By::Css(sel::ITEM_IMAGE)).await?;
    let name = item.find(By::Css(sel::ITEM_TITLE_LINK)).await?.text().await?;
    verify!(!name.trim().is_empty(), "wishlist entry title is empty");
    let price = item.find(By::Css(sel::ITEM_PRICE)).await?.text().await?;
    verify!(price.contains('$'), "wishlist entry price missing currency: {price}");
    Ok(())
}

pub async fn empty_state_shows_browse_link(session: &mut Session) -> Result<()> {
    let wishlist = Wishlist::new(session);
    wishlist.clear().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    let message = wait::visible(driver, sel::EMPTY_MESSAGE, timeout).await?.text().await?;
    verify!(
        message.contains("Your wishlist is empty"),
        "unexpected empty-wishlist message: {message}"
    );
    let browse = driver.find(By::Css(sel::BROWSE_PRODUCTS_LINK)).await?;
    verify!(browse.is_displayed().await?, "browse-products link is not displayed");
    Ok(())
}

pub async fn remove_item_updates_list(session: &mut Session) -> Result<()> {
    let wishlist = Wishlist::new(session);
    wishlist.clear().await?;
    wishlist.add("2").await?;
    wishlist.open().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    let item = wait::visible(driver, sel::ITEM, timeout).await?;
    item.find(By::Css(sel::ITEM_REMOVE)).await?.click().await?;

    let seen = expect_toast(driver, "Removed from wishlist", Severity::Success, timeout).await;
    verify!(seen, "wishlist removal toast never appeared");
    wait::stale(&item, timeout).await?;
    verify!(!wishlist.contains("2").await?, "entry still present after removal");
    Ok(())
}

pub async fn entry_link_navigates_to_detail(session: &mut Session) -> Result<()> {
    let wishlist = Wishlist::new(session);
    wishlist.add("2").await?;
    wishlist.open().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    wait::clickable(driver, sel::ITEM_TITLE_LINK, timeout)
        .await?
        .click()
        .await?;
    wait::url_contains(driver, "/product/", timeout).await?;
    Ok(())
}

/// Adding a product already on the wishlist must not create a second
/// entry.
pub async fn add_is_idempotent(session: &mut Session) -> Result<()> {
    let wishlist = Wishlist::new(session);
    wishlist.clear().await?;

    let first = wishlist.add("2").await?;
    verify!(
        first == ToggleOutcome::Added,
        "first add had unexpected outcome: {first:?}"
    );
    let second = wishlist.add("2").await?;
    verify!(
        second == ToggleOutcome::AlreadyPresent,
        "second add had unexpected outcome: {second:?}"
    );

    let entries = wishlist.items().await?.len();
    verify!(entries == 1, "expected a single wishlist entry, found {entries}");
    Ok(())
}

pub async fn redirects_to_login_when_logged_out(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/wishlist").await?;

    let url = wait::url_contains(driver, "/login", timeout).await?;
    verify!(
        url.contains("redirect=%2Fwishlist"),
        "login redirect does not carry the return path: {url}"
    );
    Ok(())
}
