//! Authentication round trip over the session controller.

use secrecy::ExposeSecret;
use storefront_e2e_harness::selectors::nav;
use storefront_e2e_harness::{Result, Session, SessionState, verify, wait};

pub async fn login_then_logout(session: &mut Session) -> Result<()> {
    session.login().await?;
    verify!(
        session.state() == SessionState::LoggedIn,
        "authenticated marker never appeared after login"
    );
    verify!(
        session.authenticated_marker_present().await,
        "user menu absent while logged in"
    );

    session.logout().await?;
    verify!(
        session.state() == SessionState::LoggedOut,
        "session still reports logged in after logout"
    );
    let timeout = session.config().wait_timeout;
    wait::present(session.driver(), nav::LOGIN_LINK, timeout).await?;
    Ok(())
}

/// Wrong password: the form must stay on the login page and surface an
/// error toast instead of authenticating.
pub async fn rejects_wrong_password(session: &mut Session) -> Result<()> {
    let email = session.config().credentials.valid_email.clone();
    let password = session
        .config()
        .credentials
        .invalid_password
        .expose_secret()
        .to_string();
    session.login_as(&email, &password).await?;

    verify!(
        session.state() == SessionState::LoggedOut,
        "session reports logged in after a rejected password"
    );
    verify!(
        !session.authenticated_marker_present().await,
        "user menu appeared after a rejected password"
    );
    Ok(())
}

pub async fn rejects_unregistered_email(session: &mut Session) -> Result<()> {
    let email = session.config().credentials.unregistered_email.clone();
    // Any password works here; the account does not exist. Reuse the
    // configured wrong password so no credential is hardcoded.
    let password = session
        .config()
        .credentials
        .invalid_password
        .expose_secret()
        .to_string();
    session.login_as(&email, &password).await?;

    verify!(
        session.state() == SessionState::LoggedOut,
        "session reports logged in for an unregistered account"
    );
    verify!(
        !session.authenticated_marker_present().await,
        "user menu appeared for an unregistered account"
    );
    Ok(())
}
