//! List recently settled sandbox transactions.

use ipaymu::{Client, Environment, OrderBy, TransactionHistoryRequest, TransactionStatus};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("IPAYMU_API_KEY")?;
    let virtual_account = std::env::var("IPAYMU_VA")?;

    let client = Client::new(api_key, virtual_account, Environment::Sandbox)?;

    let request = TransactionHistoryRequest::new()
        .with_status(TransactionStatus::Success)
        .with_order_by(OrderBy::Paid)
        .with_limit(10);

    let history = client.history_transaction(&request).await?;
    if let Some(data) = history.data {
        for transaction in data.transactions {
            println!(
                "{:>10}  {:<12}  {:?}",
                transaction.transaction_id.unwrap_or_default(),
                transaction.status_desc.as_deref().unwrap_or("-"),
                transaction.amount,
            );
        }
    }
    Ok(())
}
