//! Product detail scenarios: gallery, purchase controls, wishlist toggle,
//! sharing, and the error page for unknown products.

use storefront_e2e_harness::selectors::{self, product};
use storefront_e2e_harness::{
    Cart, Result, Session, Severity, ToggleOutcome, VariantOptions, Wishlist, expect_toast,
    verify, wait,
};
use thirtyfour::prelude::*;

pub async fn page_loads(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto(&selectors::product_path("1")).await?;

    let _ = wait::gone(driver, product::LOADING_SKELETON, timeout).await;

    wait::visible(driver, product::MAIN_IMAGE, timeout).await?;
    let title = wait::visible(driver, product::TITLE, timeout)
        .await?
        .text()
        .await?;
    verify!(!title.trim().is_empty(), "product title is empty");

    let price = driver.find(By::Css(product::PRICE)).await?.text().await?;
    verify!(price.contains('$'), "product price missing currency: {price}");

    let rating = driver.find(By::Css(product::RATING)).await?;
    let stars = rating.find_all(By::Css(product::STARS)).await?;
    verify!(stars.len() == 5, "expected 5 rating stars, found {}", stars.len());
    rating.find(By::Css(product::REVIEW_COUNT)).await?;
    Ok(())
}

pub async fn thumbnails_switch_main_image(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto(&selectors::product_path("1")).await?;

    wait::visible(driver, product::MAIN_IMAGE, timeout).await?;
    let thumbnails = driver.find_all(By::Css(product::THUMBNAILS)).await?;
    verify!(
        thumbnails.len() > 1,
        "need at least two thumbnails to switch, found {}",
        thumbnails.len()
    );

    // The first thumbnail is usually already active, so start from the
    // second and wait for the main image source to follow each click.
    for thumbnail in thumbnails.iter().skip(1) {
        let before = driver
            .find(By::Css(product::MAIN_IMAGE))
            .await?
            .attr("src")
            .await?
            .unwrap_or_default();
        thumbnail.click().await?;

        let previous = before.clone();
        wait::await_condition("main image to switch", timeout, move || {
            let previous = previous.clone();
            async move {
                let src = driver
                    .find(By::Css(product::MAIN_IMAGE))
                    .await?
                    .attr("src")
                    .await?
                    .unwrap_or_default();
                Ok((src != previous).then_some(()))
            }
        })
        .await?;
    }
    Ok(())
}

pub async fn add_to_cart_shows_toast(session: &mut Session) -> Result<()> {
    let cart = Cart::new(session);
    let confirmed = cart.add("1", 1, &VariantOptions::default()).await?;
    verify!(confirmed, "add-to-cart confirmation toast never appeared");
    Ok(())
}

pub async fn add_to_cart_with_options(session: &mut Session) -> Result<()> {
    let options = VariantOptions {
        size: Some("M".to_string()),
        color: Some("Navy Blue".to_string()),
    };
    let cart = Cart::new(session);
    let confirmed = cart.add("1", 2, &options).await?;
    verify!(confirmed, "add-to-cart confirmation toast never appeared");
    Ok(())
}

pub async fn wishlist_toggle_round_trip(session: &mut Session) -> Result<()> {
    let wishlist = Wishlist::new(session);

    let first = wishlist.toggle("1").await?;
    let second = wishlist.toggle("1").await?;
    verify!(
        first != second,
        "wishlist toggle did not alternate: {first:?} then {second:?}"
    );
    verify!(
        matches!(first, ToggleOutcome::Added | ToggleOutcome::Removed),
        "unexpected toggle outcome: {first:?}"
    );
    Ok(())
}

pub async fn share_copies_link(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto(&selectors::product_path("1")).await?;

    wait::visible(driver, product::TITLE, timeout).await?;
    wait::clickable(driver, product::SHARE_BUTTON, timeout)
        .await?
        .click()
        .await?;

    let seen = expect_toast(driver, "Link copied to clipboard!", Severity::Success, timeout).await;
    verify!(seen, "share confirmation toast never appeared");
    Ok(())
}

pub async fn unknown_product_shows_error(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto(&selectors::product_path("invalid_id")).await?;

    let heading = wait::visible(driver, product::ERROR_HEADING, timeout)
        .await?
        .text()
        .await?;
    verify!(heading.contains("Error"), "unexpected error heading: {heading}");

    let detail = driver.find(By::Css(product::ERROR_DETAIL)).await?.text().await?;
    verify!(
        detail.contains("Product not found"),
        "unexpected error detail: {detail}"
    );
    Ok(())
}
