//! Cart state manager.
//!
//! Drives the authenticated user's cart through UI actions and resolves
//! each action's asynchronous completion. Line lookup matches on the
//! product-identifying link inside each visible cart line; removals are
//! confirmed by waiting for the specific line element to go stale rather
//! than inferring from a count change.
//!
//! All operations require an authenticated session.

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use thirtyfour::prelude::*;

use crate::error::Result;
use crate::select::select_option;
use crate::selectors::{self, cart};
use crate::session::Session;
use crate::toast::{self, Severity};
use crate::wait;

/// Variant options for adding a product.
#[derive(Debug, Clone, Default)]
pub struct VariantOptions {
    pub size: Option<String>,
    pub color: Option<String>,
}

/// A derived order-summary field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryField {
    Subtotal,
    Shipping,
    Tax,
    Total,
}

impl SummaryField {
    const fn selector(self) -> &'static str {
        match self {
            Self::Subtotal => cart::SUMMARY_SUBTOTAL,
            Self::Shipping => cart::SUMMARY_SHIPPING,
            Self::Tax => cart::SUMMARY_TAX,
            Self::Total => cart::SUMMARY_TOTAL,
        }
    }
}

/// Cart operations bound to a live session.
pub struct Cart<'a> {
    session: &'a Session,
}

impl<'a> Cart<'a> {
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn driver(&self) -> &WebDriver {
        self.session.driver()
    }

    fn timeout(&self) -> Duration {
        self.session.config().wait_timeout
    }

    /// Navigate to the cart page and wait out any loading spinner.
    pub async fn open(&self) -> Result<()> {
        self.session.goto("/cart").await?;
        // Spinner may never appear on a fast load.
        let _ = wait::gone(self.driver(), cart::LOADING_SPINNER, self.timeout()).await;
        Ok(())
    }

    /// Add `product_id` to the cart from its detail page.
    ///
    /// Completion resolves by polling for the success toast; when no toast
    /// is observed a bounded settle delay covers render paths without one.
    /// Returns whether the completion signal (the toast) was observed.
    pub async fn add(
        &self,
        product_id: &str,
        quantity: u32,
        options: &VariantOptions,
    ) -> Result<bool> {
        let driver = self.driver();
        let timeout = self.timeout();
        self.session
            .goto(&selectors::product_path(product_id))
            .await?;

        if let Some(size) = &options.size {
            select_option(driver, "Select size", "size", size, timeout).await?;
        }
        if let Some(color) = &options.color {
            select_option(driver, "Select color", "color", color, timeout).await?;
        }
        if quantity != 1 {
            select_option(
                driver,
                "Select quantity",
                "quantity",
                &quantity.to_string(),
                timeout,
            )
            .await?;
        }

        wait::clickable_by(
            driver,
            By::XPath(selectors::product::ADD_TO_CART_XPATH),
            timeout,
        )
        .await?
        .click()
        .await?;

        let confirmed = toast::expect_toast(driver, "Added to cart!", Severity::Success, timeout).await;
        if !confirmed {
            // Known flakiness risk: no completion predicate on this path.
            tracing::warn!(product_id, "add-to-cart toast not observed, falling back to settle delay");
            wait::settle(self.session.config().settle_delay).await;
        }
        Ok(confirmed)
    }

    /// All visible cart lines.
    pub async fn lines(&self) -> Result<Vec<WebElement>> {
        self.open().await?;
        Ok(self.driver().find_all(By::Css(cart::ITEM)).await?)
    }

    /// The cart line for `product_id`, if present.
    ///
    /// Scans all visible lines and matches on the product link href;
    /// absence is a valid outcome, not an error.
    pub async fn line_for(&self, product_id: &str) -> Result<Option<WebElement>> {
        let wanted = selectors::product_path(product_id);
        for line in self.lines().await? {
            let Ok(link) = line.find(By::Css(cart::ITEM_TITLE_LINK)).await else {
                continue;
            };
            if let Ok(Some(href)) = link.attr("href").await {
                if href.contains(&wanted) {
                    return Ok(Some(line));
                }
            }
        }
        Ok(None)
    }

    /// Whether a line for `product_id` exists.
    pub async fn contains(&self, product_id: &str) -> Result<bool> {
        Ok(self.line_for(product_id).await?.is_some())
    }

    /// Remove lines until none remain, then verify the empty-cart marker.
    ///
    /// Idempotent: on an already-empty cart this only verifies the empty
    /// state. A stalled removal is logged and the loop gives up rather
    /// than spinning.
    pub async fn clear(&self) -> Result<()> {
        let driver = self.driver();
        self.open().await?;

        loop {
            let removes = driver.find_all(By::Css(cart::ITEM_REMOVE)).await?;
            let Some(first) = removes.first() else { break };
            let before = removes.len();
            first.click().await?;

            let shrunk = wait::await_condition(
                "cart line count to decrease",
                self.timeout(),
                move || async move {
                    let count = driver.find_all(By::Css(cart::ITEM_REMOVE)).await?.len();
                    Ok((count < before).then_some(()))
                },
            )
            .await;
            if let Err(err) = shrunk {
                tracing::warn!(%err, "cart clearing stalled");
                break;
            }
        }

        // Ending in the verified empty state is part of the contract; a
        // stuck page is reset so the next scenario starts recoverable.
        if let Err(err) = wait::visible(driver, cart::EMPTY_MESSAGE, self.timeout()).await {
            self.session.reset_to_root().await?;
            return Err(err);
        }
        Ok(())
    }

    /// Step the quantity of the line for `product_id` up or down, waiting
    /// for the displayed quantity to change.
    ///
    /// Returns `false` when no matching line exists or the displayed value
    /// never changed. Both are absence signals, not errors.
    pub async fn update_quantity(&self, product_id: &str, increase: bool) -> Result<bool> {
        let Some(line) = self.line_for(product_id).await? else {
            return Ok(false);
        };

        let before = displayed_quantity(&line).await;
        let button = if increase {
            cart::ITEM_INCREASE
        } else {
            cart::ITEM_DECREASE
        };
        line.find(By::Css(button)).await?.click().await?;

        let line_ref = &line;
        let changed = wait::await_condition(
            "displayed quantity to change",
            self.timeout(),
            move || async move {
                Ok((displayed_quantity(line_ref).await != before).then_some(()))
            },
        )
        .await;
        match changed {
            Ok(()) => Ok(true),
            Err(err) if err.is_timeout() => {
                tracing::warn!(product_id, %err, "quantity never changed");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Remove the line for `product_id`, confirmed by the line element
    /// going stale.
    ///
    /// Returns `false` when no matching line exists.
    pub async fn remove(&self, product_id: &str) -> Result<bool> {
        let Some(line) = self.line_for(product_id).await? else {
            return Ok(false);
        };
        line.find(By::Css(cart::ITEM_REMOVE)).await?.click().await?;
        wait::stale(&line, self.timeout()).await?;
        Ok(true)
    }

    /// Read a derived summary field.
    ///
    /// A missing element or unparsable text degrades to zero so summary
    /// assertions fail on their own terms instead of aborting the
    /// scenario.
    pub async fn summary_value(&self, field: SummaryField) -> Decimal {
        match wait::visible(self.driver(), field.selector(), self.timeout()).await {
            Ok(element) => {
                let text = element.text().await.unwrap_or_default();
                parse_currency(&text).unwrap_or_else(|| {
                    tracing::warn!(?field, %text, "could not parse summary value");
                    Decimal::ZERO
                })
            }
            Err(err) => {
                tracing::warn!(?field, %err, "summary value not found");
                Decimal::ZERO
            }
        }
    }
}

/// Displayed quantity of a cart line, or `None` while mid-update.
async fn displayed_quantity(line: &WebElement) -> Option<u32> {
    let element = line.find(By::Css(cart::ITEM_QUANTITY)).await.ok()?;
    element.text().await.ok()?.trim().parse().ok()
}

/// Parse a currency-formatted field (`$19.99`) into a decimal amount.
#[must_use]
pub fn parse_currency(text: &str) -> Option<Decimal> {
    let cleaned = text.trim().trim_start_matches('$').replace(',', "");
    Decimal::from_str(cleaned.trim()).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_plain() {
        assert_eq!(parse_currency("$19.99").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_currency("$0.00").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_currency_whitespace_and_thousands() {
        assert_eq!(parse_currency("  $1,234.50 ").unwrap(), Decimal::new(123_450, 2));
        assert_eq!(parse_currency("$ 12.00").unwrap(), Decimal::new(1200, 2));
    }

    #[test]
    fn test_parse_currency_rejects_non_numeric() {
        assert!(parse_currency("Free").is_none());
        assert!(parse_currency("").is_none());
        assert!(parse_currency("$").is_none());
    }

    #[test]
    fn test_summary_field_selectors_are_distinct() {
        let fields = [
            SummaryField::Subtotal,
            SummaryField::Shipping,
            SummaryField::Tax,
            SummaryField::Total,
        ];
        for a in fields {
            for b in fields {
                if a != b {
                    assert_ne!(a.selector(), b.selector());
                }
            }
        }
    }
}
