//! Option selection against either a rich combobox or a native `<select>`.
//!
//! The product pages render option pickers as styled comboboxes
//! (`button[role='combobox']` opening a `[role='listbox']`), but fall back
//! to native `<select>` elements in some render paths. Selection is a
//! prioritized list of strategies tried in order; each can independently
//! time out, and the first success short-circuits the rest.

use std::time::Duration;

use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;

use crate::error::Result;
use crate::wait;

/// Select `value` in the picker identified by its `placeholder` text
/// (rich tier) or its `name` attribute (native tier).
pub async fn select_option(
    driver: &WebDriver,
    placeholder: &str,
    name: &str,
    value: &str,
    timeout: Duration,
) -> Result<()> {
    match rich_select(driver, placeholder, value, timeout).await {
        Ok(()) => return Ok(()),
        Err(err) if err.is_timeout() => {
            tracing::debug!(placeholder, %err, "combobox tier failed, trying native select");
        }
        Err(err) => return Err(err),
    }
    native_select(driver, name, value, timeout).await
}

/// Rich tier: open the combobox whose trigger shows `placeholder`, then
/// click the listbox option with text `value`.
async fn rich_select(
    driver: &WebDriver,
    placeholder: &str,
    value: &str,
    timeout: Duration,
) -> Result<()> {
    let trigger = wait::await_condition(
        &format!("combobox trigger containing `{placeholder}`"),
        timeout,
        move || async move {
            for button in driver.find_all(By::Css("button[role='combobox']")).await? {
                let text = button.text().await.unwrap_or_default();
                if text.contains(placeholder) && button.is_clickable().await.unwrap_or(false) {
                    return Ok(Some(button));
                }
            }
            Ok(None)
        },
    )
    .await?;
    trigger.click().await?;

    wait::visible(driver, "[role='listbox']", timeout).await?;
    let option = wait::await_condition(
        &format!("listbox option `{value}`"),
        timeout,
        move || async move {
            for candidate in driver.find_all(By::Css("[role='option']")).await? {
                let text = candidate.text().await.unwrap_or_default();
                if text.trim() == value {
                    return Ok(Some(candidate));
                }
            }
            Ok(None)
        },
    )
    .await?;
    option.click().await?;
    Ok(())
}

/// Native tier: `<select name='...'>` driven through the standard select
/// component.
async fn native_select(
    driver: &WebDriver,
    name: &str,
    value: &str,
    timeout: Duration,
) -> Result<()> {
    let selector = format!("select[name='{name}']");
    let element = wait::present(driver, &selector, timeout).await?;
    let select = SelectElement::new(&element).await?;
    select.select_by_exact_text(value).await?;
    Ok(())
}
