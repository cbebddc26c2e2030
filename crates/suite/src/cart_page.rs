//! Cart page scenarios.
//!
//! Scenarios that need cart contents prepare their own state through the
//! cart manager instead of relying on what earlier scenarios left behind.

use rust_decimal::Decimal;
use storefront_e2e_harness::selectors::cart as sel;
use storefront_e2e_harness::{
    Cart, Result, Session, Severity, SummaryField, VariantOptions, expect_toast, verify, wait,
};
use thirtyfour::prelude::*;

pub async fn page_loads(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    Cart::new(session).open().await?;

    let title = wait::visible(driver, sel::PAGE_TITLE, timeout).await?.text().await?;
    verify!(
        title.contains("Shopping Cart") || title.contains("Your cart is empty"),
        "unexpected cart page heading: {title}"
    );
    Ok(())
}

pub async fn cleared_cart_shows_empty_state(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    let message = wait::visible(driver, sel::EMPTY_MESSAGE, timeout).await?.text().await?;
    verify!(
        message.contains("Your cart is empty"),
        "unexpected empty-cart message: {message}"
    );
    let continue_shopping = driver.find(By::Css(sel::CONTINUE_SHOPPING)).await?;
    verify!(
        continue_shopping.is_displayed().await?,
        "continue-shopping link is not displayed"
    );
    Ok(())
}

pub async fn line_details_and_summary_render(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    let line = wait::visible(driver, sel::ITEM, timeout).await?;
    line.find(By::Css(sel::ITEM_IMAGE)).await?;
    let name = line.find(By::Css(sel::ITEM_TITLE_LINK)).await?.text().await?;
    verify!(!name.trim().is_empty(), "cart line title is empty");
    let price = line.find(By::Css(sel::ITEM_PRICE)).await?.text().await?;
    verify!(price.contains('$'), "cart line price missing currency: {price}");

    wait::visible(driver, sel::SUMMARY, timeout).await?;
    let subtotal = cart.summary_value(SummaryField::Subtotal).await;
    verify!(subtotal > Decimal::ZERO, "subtotal not positive: {subtotal}");
    Ok(())
}

pub async fn quantity_update_shows_toast(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;

    let updated = cart.update_quantity("1", true).await?;
    verify!(updated, "displayed quantity never changed");

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    let seen = expect_toast(driver, "Cart updated successfully", Severity::Success, timeout).await;
    verify!(seen, "quantity update toast never appeared");
    Ok(())
}

pub async fn item_removal_shows_toast_and_empty_state(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let removed = cart.remove("1").await?;
    verify!(removed, "no cart line found to remove");

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    let seen = expect_toast(driver, "Item removed successfully", Severity::Success, timeout).await;
    verify!(seen, "item removal toast never appeared");
    wait::visible(driver, sel::EMPTY_MESSAGE, timeout).await?;
    Ok(())
}

pub async fn checkout_button_navigates(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    wait::clickable(driver, sel::CHECKOUT_BUTTON, timeout)
        .await?
        .click()
        .await?;
    wait::url_contains(driver, "/checkout", timeout).await?;
    Ok(())
}

/// Adding several products and clearing must always end in the verified
/// empty state.
pub async fn add_then_clear_reaches_empty_state(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 2, &VariantOptions::default()).await?;
    cart.add("2", 1, &VariantOptions::default()).await?;

    verify!(cart.contains("1").await?, "product 1 missing after add");
    verify!(cart.contains("2").await?, "product 2 missing after add");

    cart.clear().await?;
    verify!(cart.lines().await?.is_empty(), "cart lines remain after clear");
    Ok(())
}

/// Subtotal moves from zero to positive on the first add, and the total
/// never undercuts it.
pub async fn add_raises_subtotal_from_zero(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.open().await?;
    // Summary fields degrade to zero on the empty page.
    let empty_subtotal = cart.summary_value(SummaryField::Subtotal).await;
    verify!(
        empty_subtotal == Decimal::ZERO,
        "empty cart reported nonzero subtotal: {empty_subtotal}"
    );

    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.open().await?;
    let subtotal = cart.summary_value(SummaryField::Subtotal).await;
    let total = cart.summary_value(SummaryField::Total).await;
    verify!(subtotal > Decimal::ZERO, "subtotal not positive after add: {subtotal}");
    verify!(total >= subtotal, "total {total} undercuts subtotal {subtotal}");
    Ok(())
}

pub async fn quantity_update_for_absent_product_is_refused(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.open().await?;
    let updated = cart.update_quantity("9999", true).await?;
    verify!(!updated, "quantity update reported success for an absent product");
    Ok(())
}

pub async fn removed_product_is_not_found_on_requery(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    verify!(cart.contains("1").await?, "product 1 missing after add");

    let removed = cart.remove("1").await?;
    verify!(removed, "no cart line found to remove");
    verify!(!cart.contains("1").await?, "product 1 still present after removal");
    Ok(())
}

pub async fn quantity_update_recomputes_summary(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let before = cart.summary_value(SummaryField::Subtotal).await;
    let updated = cart.update_quantity("1", true).await?;
    verify!(updated, "displayed quantity never changed");

    let after = cart.summary_value(SummaryField::Subtotal).await;
    verify!(after > before, "subtotal did not grow: {before} -> {after}");
    Ok(())
}

pub async fn removal_recomputes_summary(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.add("2", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let before = cart.summary_value(SummaryField::Subtotal).await;
    let removed = cart.remove("1").await?;
    verify!(removed, "no cart line found to remove");

    let after = cart.summary_value(SummaryField::Subtotal).await;
    verify!(after < before, "subtotal did not shrink: {before} -> {after}");
    Ok(())
}

pub async fn multi_item_summary_calculation(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 2, &VariantOptions::default()).await?;
    cart.add("2", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let subtotal = cart.summary_value(SummaryField::Subtotal).await;
    let tax = cart.summary_value(SummaryField::Tax).await;
    let total = cart.summary_value(SummaryField::Total).await;
    verify!(subtotal > Decimal::ZERO, "subtotal not positive: {subtotal}");
    verify!(
        total >= subtotal + tax,
        "total {total} below subtotal {subtotal} plus tax {tax}"
    );
    Ok(())
}

pub async fn prepared_cart_shows_items_and_checkout(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    wait::visible(driver, sel::ITEM, timeout).await?;
    wait::visible(driver, sel::SUMMARY, timeout).await?;
    let checkout = driver.find(By::Css(sel::CHECKOUT_BUTTON)).await?;
    verify!(checkout.is_displayed().await?, "checkout button is not displayed");
    Ok(())
}

pub async fn prepared_empty_cart_hides_checkout(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;

    let driver = session.driver();
    if let Ok(button) = driver.find(By::Css(sel::CHECKOUT_BUTTON)).await {
        verify!(
            !button.is_displayed().await?,
            "checkout button displayed on an empty cart"
        );
    }
    Ok(())
}

pub async fn proceed_to_checkout_shows_shipping_form(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    cart.clear().await?;
    cart.add("1", 1, &VariantOptions::default()).await?;
    cart.open().await?;

    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    wait::clickable(driver, sel::CHECKOUT_BUTTON, timeout)
        .await?
        .click()
        .await?;
    wait::url_contains(driver, "/checkout", timeout).await?;
    wait::present_by(
        driver,
        By::XPath("//h2[contains(text(), 'Shipping address')]"),
        timeout,
    )
    .await?;
    Ok(())
}
