//! KYC application commands.

use ismartpay_client::{ApiError, ConsoleClient};

use super::{format_timestamp, render_table};

/// List KYC applications.
pub async fn list(client: &ConsoleClient) -> Result<(), ApiError> {
    let applications = client.kyc().list().await?;
    client.session().set_last_view("kyc");

    let rows: Vec<Vec<String>> = applications
        .iter()
        .map(|app| {
            vec![
                app.id.to_string(),
                app.applicant.clone(),
                app.email.clone(),
                app.document_kind.clone(),
                app.status.label().to_string(),
                format_timestamp(app.submitted_at),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(
            &["ID", "APPLICANT", "EMAIL", "DOCUMENT", "STATUS", "SUBMITTED"],
            &rows
        )
    );
    Ok(())
}
