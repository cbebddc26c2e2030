//! Product listings scenarios: grid rendering, search, filters, and
//! pagination.

use storefront_e2e_harness::selectors::listings;
use storefront_e2e_harness::{Result, Session, verify, wait};
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;

pub async fn page_loads_with_search_controls(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/listings").await?;

    let title = wait::visible(driver, listings::PAGE_TITLE, timeout)
        .await?
        .text()
        .await?;
    verify!(
        title.contains("All UTA Merchandise"),
        "unexpected listings title: {title}"
    );
    wait::visible(driver, listings::SEARCH_INPUT, timeout).await?;
    wait::visible(driver, listings::SEARCH_BUTTON, timeout).await?;
    Ok(())
}

pub async fn product_grid_renders(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/listings").await?;

    // The skeleton shows while the grid loads; a fast render may skip it.
    let _ = wait::gone(driver, listings::LOADING_SKELETON, timeout).await;

    let cards = wait::all_present(
        driver,
        storefront_e2e_harness::selectors::home::PRODUCT_CARD,
        timeout,
    )
    .await?;
    verify!(!cards.is_empty(), "no product cards in the listings grid");

    let info = wait::visible(driver, listings::RESULTS_INFO, timeout)
        .await?
        .text()
        .await?;
    verify!(info.contains("results"), "results info missing: {info}");
    Ok(())
}

pub async fn search_filters_results(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/listings").await?;

    let input = wait::visible(driver, listings::SEARCH_INPUT, timeout).await?;
    input.send_keys("hoodie").await?;
    wait::clickable(driver, listings::SEARCH_BUTTON, timeout)
        .await?
        .click()
        .await?;

    // Results re-render asynchronously; wait until a card title reflects
    // the query instead of sleeping.
    wait::await_condition("search results to match query", timeout, move || async move {
        let titles = driver
            .find_all(By::Css(
                storefront_e2e_harness::selectors::home::PRODUCT_CARD_TITLE,
            ))
            .await?;
        for title in titles {
            let text = title.text().await.unwrap_or_default();
            if text.to_lowercase().contains("hoodie") {
                return Ok(Some(()));
            }
        }
        Ok(None)
    })
    .await?;
    Ok(())
}

pub async fn filter_panel_narrows_results(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/listings").await?;

    wait::clickable(driver, listings::FILTER_BUTTON, timeout)
        .await?
        .click()
        .await?;
    let panel = wait::visible(driver, listings::FILTER_PANEL, timeout).await?;

    let category = wait::clickable(driver, listings::CATEGORY_FILTER, timeout).await?;
    SelectElement::new(&category)
        .await?
        .select_by_exact_text("Apparel")
        .await?;

    // Size and color are rendered as clickable badges, not selects.
    for badge in panel.find_all(By::Css(listings::OPTION_BADGES)).await? {
        let label = badge.text().await.unwrap_or_default();
        if label == "M" || label == "Blue" {
            badge.click().await?;
        }
    }

    let price_inputs = panel.find_all(By::Css(listings::PRICE_FILTER_INPUTS)).await?;
    verify!(
        price_inputs.len() >= 2,
        "expected min and max price inputs, found {}",
        price_inputs.len()
    );
    if let (Some(min), Some(max)) = (price_inputs.first(), price_inputs.get(1)) {
        min.send_keys("20").await?;
        max.send_keys("50").await?;
    }

    let sort = wait::clickable(driver, listings::SORT_SELECT, timeout).await?;
    SelectElement::new(&sort).await?.select_by_value("price-low").await?;

    let info = wait::visible(driver, listings::RESULTS_INFO, timeout)
        .await?
        .text()
        .await?;
    verify!(info.contains("results"), "results info missing after filtering: {info}");

    // Filtered cards must come from the selected category.
    wait::await_condition("a card from the filtered category", timeout, move || async move {
        let categories = driver
            .find_all(By::Css(storefront_e2e_harness::selectors::home::PRODUCT_CARD_CATEGORY))
            .await?;
        for category in categories {
            let text = category.text().await.unwrap_or_default();
            if text.to_lowercase().contains("apparel") {
                return Ok(Some(()));
            }
        }
        Ok(None)
    })
    .await?;
    Ok(())
}

pub async fn pagination_round_trip(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/listings").await?;

    wait::visible(driver, listings::PAGINATION, timeout).await?;
    let initial = wait::visible(driver, listings::PAGINATION_TEXT, timeout)
        .await?
        .text()
        .await?;

    wait::clickable(driver, listings::PAGINATION_NEXT, timeout)
        .await?
        .click()
        .await?;
    let moved = initial.clone();
    wait::await_condition("page indicator to advance", timeout, move || {
        let moved = moved.clone();
        async move {
            let text = driver
                .find(By::Css(listings::PAGINATION_TEXT))
                .await?
                .text()
                .await?;
            Ok((text != moved).then_some(()))
        }
    })
    .await?;

    wait::clickable(driver, listings::PAGINATION_PREV, timeout)
        .await?
        .click()
        .await?;
    let back_to = initial;
    wait::await_condition("page indicator to return", timeout, move || {
        let back_to = back_to.clone();
        async move {
            let text = driver
                .find(By::Css(listings::PAGINATION_TEXT))
                .await?
                .text()
                .await?;
            Ok((text == back_to).then_some(()))
        }
    })
    .await?;
    Ok(())
}
