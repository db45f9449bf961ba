//! Fee configuration commands.

use ismartpay_client::{ApiError, ConsoleClient, FeeDraft, FeeKind, FeeRecord};
use ismartpay_core::{FeeChannel, RecordStatus};

use super::{format_timestamp, render_table};

const VIEW: &str = "fees";

/// Arguments for `fees create`.
pub struct CreateArgs {
    pub name: String,
    pub description: String,
    pub rate: Option<String>,
    pub amount: Option<String>,
    pub service: String,
    pub channel: String,
    pub inactive: bool,
}

/// List configured fees.
pub async fn list(client: &ConsoleClient) -> Result<(), ApiError> {
    let fees = client.fees().list().await?;
    client.session().set_last_view(VIEW);
    print_fees(&fees);
    Ok(())
}

/// Create a fee and show the refreshed list.
pub async fn create(client: &ConsoleClient, args: CreateArgs) -> Result<(), ApiError> {
    let (fee_type, rate, amount) = match (args.rate, args.amount) {
        (Some(rate), None) => (FeeKind::Rate, rate, String::new()),
        (None, Some(amount)) => (FeeKind::Flat, String::new(), amount),
        (Some(_), Some(_)) => {
            return Err(ApiError::Validation(
                "rate and amount are mutually exclusive".to_string(),
            ));
        }
        (None, None) => {
            return Err(ApiError::Validation(
                "one of --rate or --amount is required".to_string(),
            ));
        }
    };

    let draft = FeeDraft {
        name: args.name,
        description: args.description,
        fee_type,
        rate,
        amount,
        applied_to: args.service,
        channel: FeeChannel::from_wire(&args.channel),
        status: if args.inactive {
            RecordStatus::Inactive
        } else {
            RecordStatus::Active
        },
    };

    let fees = client.fees().create(&draft).await?;
    client.session().set_last_view(VIEW);
    tracing::info!("Fee created");
    print_fees(&fees);
    Ok(())
}

fn print_fees(fees: &[FeeRecord]) {
    let rows: Vec<Vec<String>> = fees
        .iter()
        .map(|fee| {
            vec![
                fee.id.to_string(),
                fee.name.clone(),
                fee.value.describe(),
                fee.service_name().to_string(),
                fee.channel.label().to_string(),
                fee.status.label().to_string(),
                format_timestamp(fee.created_at),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(
            &["ID", "NAME", "VALUE", "SERVICE", "CHANNEL", "STATUS", "CREATED"],
            &rows
        )
    );
}
