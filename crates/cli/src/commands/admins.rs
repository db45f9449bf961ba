//! Admin account commands.

use ismartpay_client::{AdminRecord, ApiError, ConsoleClient};
use ismartpay_core::{AdminId, RoleId};

use super::{format_timestamp, render_table};

const VIEW: &str = "admins";

/// List admin accounts.
pub async fn list(client: &ConsoleClient) -> Result<(), ApiError> {
    let admins = client.admins().list().await?;
    client.session().set_last_view(VIEW);
    print_admins(&admins);
    Ok(())
}

/// Reassign an admin's role and show the refreshed list.
pub async fn set_role(client: &ConsoleClient, id: &str, role: &str) -> Result<(), ApiError> {
    let admins = client
        .admins()
        .assign_role(&AdminId::new(id), &RoleId::new(role))
        .await?;
    client.session().set_last_view(VIEW);
    tracing::info!("Role updated for {id}");
    print_admins(&admins);
    Ok(())
}

/// Delete an admin account and show the refreshed list.
pub async fn delete(client: &ConsoleClient, id: &str) -> Result<(), ApiError> {
    let admins = client.admins().remove(&AdminId::new(id)).await?;
    client.session().set_last_view(VIEW);
    tracing::info!("Deleted {id}");
    print_admins(&admins);
    Ok(())
}

fn print_admins(admins: &[AdminRecord]) {
    let rows: Vec<Vec<String>> = admins
        .iter()
        .map(|admin| {
            vec![
                admin.id.to_string(),
                admin.username.clone(),
                admin.email.clone(),
                admin
                    .role
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |role| role.name.clone()),
                if admin.active { "active" } else { "inactive" }.to_string(),
                format_timestamp(admin.created_at),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(&["ID", "NAME", "EMAIL", "ROLE", "STATUS", "CREATED"], &rows)
    );
}
