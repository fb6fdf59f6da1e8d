//! List the most recent payments on an account.
//!
//! ```sh
//! KEELBANK_TOKEN=... cargo run --example list_payments -- 10001
//! ```

use anyhow::Context;
use keelbank_sdk::{Keelbank, ListPaymentParams, Sort};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("KEELBANK_TOKEN").context("KEELBANK_TOKEN must be set")?;
    let account_id = std::env::args().nth(1).context("usage: list_payments <account-id>")?;

    let bank = Keelbank::sandbox(token)?;
    let payments = bank
        .payments()
        .list(
            &ListPaymentParams::new()
                .page(0, 25)
                .account_id(account_id)
                .sort(Sort::CreatedAtDesc),
        )
        .await?;

    for payment in &payments {
        tracing::info!(
            id = payment.id(),
            amount = payment.amount(),
            status = ?payment.status(),
            "payment"
        );
    }
    println!("{} payments", payments.len());

    Ok(())
}
