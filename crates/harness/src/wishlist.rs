//! Wishlist state manager.
//!
//! Mirrors the cart manager's lookup-by-product-link pattern. Membership
//! is toggled from the product detail page, where the toggle control's
//! `aria-label` doubles as the membership signal; at most one entry can
//! exist per product, so `add` detects existing membership and skips the
//! toggle.
//!
//! All operations require an authenticated session.

use std::time::Duration;

use thirtyfour::prelude::*;

use crate::error::Result;
use crate::selectors::{self, product, wishlist};
use crate::session::Session;
use crate::toast::{self, Severity};
use crate::wait;

const ADD_LABEL: &str = "Add to wishlist";
const REMOVE_LABEL: &str = "Remove from wishlist";

/// What a toggle on the product page actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// `add` found the product already present and skipped the toggle.
    AlreadyPresent,
}

/// Wishlist operations bound to a live session.
pub struct Wishlist<'a> {
    session: &'a Session,
}

impl<'a> Wishlist<'a> {
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

    /// Navigate to the wishlist page and wait out any loading spinner.
    pub async fn open(&self) -> Result<()> {
        self.session.goto("/wishlist").await?;
        // Spinner may never appear on a fast load.
        let _ = wait::gone(self.driver(), wishlist::LOADING_SPINNER, self.timeout()).await;
        Ok(())
    }

    /// Flip the wishlist toggle on the product's detail page, waiting for
    /// the control's label to change and the matching toast.
    pub async fn toggle(&self, product_id: &str) -> Result<ToggleOutcome> {
        let driver = self.driver();
        let timeout = self.timeout();
        self.session
            .goto(&selectors::product_path(product_id))
            .await?;

        let button = wait::clickable(driver, product::WISHLIST_TOGGLE, timeout).await?;
        let before = button.attr("aria-label").await?.unwrap_or_default();
        button.click().await?;

        let flip_from = before.clone();
        wait::await_condition("wishlist toggle label to flip", timeout, move || {
            let flip_from = flip_from.clone();
            async move {
                let toggle = driver.find(By::Css(product::WISHLIST_TOGGLE)).await?;
                let label = toggle.attr("aria-label").await?.unwrap_or_default();
                Ok((label != flip_from).then_some(()))
            }
        })
        .await?;

        let (expected_toast, outcome) = transition(&before);
        if !toast::expect_toast(driver, expected_toast, Severity::Success, timeout).await {
            tracing::warn!(product_id, expected_toast, "wishlist toast not observed");
        }
        Ok(outcome)
    }

    /// Ensure `product_id` is on the wishlist.
    ///
    /// Idempotent: when the toggle already reads "Remove from wishlist"
    /// the product is a member and no action is taken.
    pub async fn add(&self, product_id: &str) -> Result<ToggleOutcome> {
        let driver = self.driver();
        let timeout = self.timeout();
        self.session
            .goto(&selectors::product_path(product_id))
            .await?;

        let button = wait::clickable(driver, product::WISHLIST_TOGGLE, timeout).await?;
        let label = button.attr("aria-label").await?.unwrap_or_default();
        if label == REMOVE_LABEL {
            tracing::debug!(product_id, "already on wishlist");
            return Ok(ToggleOutcome::AlreadyPresent);
        }
        debug_assert_eq!(label, ADD_LABEL);
        self.toggle(product_id).await
    }

    /// All visible wishlist entries.
    pub async fn items(&self) -> Result<Vec<WebElement>> {
        self.open().await?;
        Ok(self.driver().find_all(By::Css(wishlist::ITEM)).await?)
    }

    /// Whether an entry for `product_id` exists, matching on the product
    /// link inside each entry.
    pub async fn contains(&self, product_id: &str) -> Result<bool> {
        let wanted = selectors::product_path(product_id);
        for item in self.items().await? {
            let Ok(link) = item.find(By::Css(wishlist::ITEM_TITLE_LINK)).await else {
                continue;
            };
            if let Ok(Some(href)) = link.attr("href").await {
                if href.contains(&wanted) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Remove entries until none remain, then verify the empty-state
    /// marker. Idempotent, matching the cart manager's guarantee.
    pub async fn clear(&self) -> Result<()> {
        let driver = self.driver();
        self.open().await?;

        loop {
            let removes = driver.find_all(By::Css(wishlist::ITEM_REMOVE)).await?;
            let Some(first) = removes.first() else { break };
            if !first.is_displayed().await.unwrap_or(false) {
                break;
            }
            let before = removes.len();
            first.click().await?;

            let shrunk = wait::await_condition(
                "wishlist entry count to decrease",
                self.timeout(),
                move || async move {
                    let count = driver.find_all(By::Css(wishlist::ITEM_REMOVE)).await?.len();
                    Ok((count < before).then_some(()))
                },
            )
            .await;
            if let Err(err) = shrunk {
                tracing::warn!(%err, "wishlist clearing stalled");
                break;
            }
        }

        if let Err(err) = wait::visible(driver, wishlist::EMPTY_MESSAGE, self.timeout()).await {
            self.session.reset_to_root().await?;
            return Err(err);
        }
        Ok(())
    }
}

/// Toast text and outcome implied by the toggle label read before the
/// click.
fn transition(before_label: &str) -> (&'static str, ToggleOutcome) {
    if before_label.contains("Add") {
        ("Added to wishlist", ToggleOutcome::Added)
    } else {
        ("Removed from wishlist", ToggleOutcome::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_labels_are_both_matched_by_selector() {
        // The combined selector must cover both membership states.
        assert!(product::WISHLIST_TOGGLE.contains(ADD_LABEL));
        assert!(product::WISHLIST_TOGGLE.contains(REMOVE_LABEL));
    }

    #[test]
    fn test_transition_follows_label_read_before_click() {
        assert_eq!(transition(ADD_LABEL), ("Added to wishlist", ToggleOutcome::Added));
        assert_eq!(
            transition(REMOVE_LABEL),
            ("Removed from wishlist", ToggleOutcome::Removed)
        );
    }
}
