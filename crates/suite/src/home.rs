//! Home page scenarios: hero, featured products, category grid, and the
//! navigation paths leading out of them.

use storefront_e2e_harness::selectors::{chrome, home};
use storefront_e2e_harness::{Result, Session, verify, wait};
use thirtyfour::prelude::*;

pub async fn page_loads_with_hero(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    wait::visible(driver, chrome::HEADER, timeout).await?;
    let hero = wait::visible(driver, home::HERO_SECTION, timeout).await?;

    let title = hero.find(By::Css(home::HERO_TITLE)).await?.text().await?;
    verify!(!title.trim().is_empty(), "hero title is empty");

    let description = hero.find(By::Css(home::HERO_DESCRIPTION)).await?;
    verify!(
        description.is_displayed().await?,
        "hero description is not displayed"
    );
    let cta = hero.find(By::Css(home::HERO_BUTTON)).await?;
    verify!(cta.is_displayed().await?, "hero call to action is not displayed");
    Ok(())
}

pub async fn featured_products_grid(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    let section = wait::visible(driver, home::FEATURED_SECTION, timeout).await?;
    let heading = section.find(By::Css(home::FEATURED_TITLE)).await?.text().await?;
    verify!(
        heading.contains("Featured"),
        "unexpected featured section heading: {heading}"
    );

    let cards = wait::all_present(driver, home::PRODUCT_CARD, timeout).await?;
    verify!(!cards.is_empty(), "no featured product cards rendered");

    let first = cards.first().ok_or_else(|| {
        storefront_e2e_harness::HarnessError::Assertion("no first product card".into())
    })?;
    first.find(By::Css(home::PRODUCT_CARD_IMAGE)).await?;
    let name = first.find(By::Css(home::PRODUCT_CARD_TITLE)).await?.text().await?;
    verify!(!name.trim().is_empty(), "product card title is empty");
    let price = first.find(By::Css(home::PRODUCT_CARD_PRICE)).await?.text().await?;
    verify!(price.contains('$'), "product card price missing currency: {price}");
    Ok(())
}

pub async fn categories_grid(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    let cards = wait::all_present(driver, home::CATEGORY_CARD, timeout).await?;
    verify!(!cards.is_empty(), "no category cards rendered");
    for card in &cards {
        card.find(By::Css(home::CATEGORY_IMAGE)).await?;
        let label = card.find(By::Css(home::CATEGORY_TITLE)).await?.text().await?;
        verify!(!label.trim().is_empty(), "category card label is empty");
    }
    Ok(())
}

pub async fn product_card_navigates_to_detail(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    wait::clickable(driver, home::PRODUCT_CARD_TITLE_LINK, timeout)
        .await?
        .click()
        .await?;
    wait::url_contains(driver, "/product/", timeout).await?;
    Ok(())
}

pub async fn category_card_navigates_to_listings(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    wait::clickable(driver, home::CATEGORY_CARD, timeout)
        .await?
        .click()
        .await?;
    wait::url_contains(driver, "/listings", timeout).await?;
    Ok(())
}

pub async fn hero_cta_navigates_to_listings(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    wait::clickable(driver, home::HERO_BUTTON, timeout)
        .await?
        .click()
        .await?;
    wait::url_contains(driver, "/listings", timeout).await?;
    Ok(())
}

/// The first featured card's link target and the page actually reached
/// after clicking it must agree.
pub async fn featured_link_href_matches_destination(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    let link = wait::clickable(driver, home::PRODUCT_CARD_TITLE_LINK, timeout).await?;
    let href = link
        .attr("href")
        .await?
        .unwrap_or_default();
    verify!(
        href.contains("/product/"),
        "featured card link has unexpected href: {href}"
    );
    link.click().await?;

    let path = href
        .rsplit_once("/product/")
        .map_or(href.clone(), |(_, id)| format!("/product/{id}"));
    wait::url_contains(driver, &path, timeout).await?;
    Ok(())
}

pub async fn view_all_products_link(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    wait::clickable_by(driver, By::XPath(home::VIEW_ALL_XPATH), timeout)
        .await?
        .click()
        .await?;
    wait::url_contains(driver, "/listings", timeout).await?;
    Ok(())
}

/// Personalized recommendations for an authenticated user.
pub async fn recommendations_for_logged_in_user(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    let cards = wait::all_present(driver, home::PRODUCT_CARD, timeout).await?;
    verify!(!cards.is_empty(), "no recommendation cards rendered");
    Ok(())
}

/// Generic recommendations shown to anonymous visitors.
pub async fn recommendations_for_logged_out_user(session: &mut Session) -> Result<()> {
    let driver = session.driver();
    let timeout = session.config().wait_timeout;
    session.goto("/").await?;

    let cards = wait::all_present(driver, home::PRODUCT_CARD, timeout).await?;
    verify!(!cards.is_empty(), "no recommendation cards rendered");
    Ok(())
}
