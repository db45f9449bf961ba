//! Role commands.

use ismartpay_client::{ApiError, ConsoleClient};

use super::{format_timestamp, render_table};

/// List roles with their permissions.
pub async fn list(client: &ConsoleClient) -> Result<(), ApiError> {
    let roles = client.roles().list().await?;
    client.session().set_last_view("roles");

    let rows: Vec<Vec<String>> = roles
        .iter()
        .map(|role| {
            vec![
                role.id.to_string(),
                role.name.clone(),
                role.permission_labels().join(", "),
                role.user_count.to_string(),
                role.status.label().to_string(),
                format_timestamp(role.updated_at),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(
            &["ID", "NAME", "PERMISSIONS", "USERS", "STATUS", "UPDATED"],
            &rows
        )
    );
    Ok(())
}
