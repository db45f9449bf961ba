//! Authentication commands.

use secrecy::SecretString;

use ismartpay_client::{ApiError, ConsoleClient, NewAdmin};

/// Sign in and persist the session.
pub async fn login(client: &ConsoleClient, email: &str, password: &str) -> Result<(), ApiError> {
    client.login(email, password).await?;
    tracing::info!("Signed in as {email}");
    Ok(())
}

/// End the session and clear persisted state.
pub fn logout(client: &ConsoleClient) {
    client.logout();
    tracing::info!("Signed out");
}

/// Register a new admin account.
pub async fn register(
    client: &ConsoleClient,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    password: String,
) -> Result<(), ApiError> {
    let new_admin = NewAdmin {
        first_name,
        last_name,
        email,
        phone,
        password: SecretString::from(password),
    };
    client.register(&new_admin).await?;
    tracing::info!("Registered {}", new_admin.email);
    Ok(())
}
