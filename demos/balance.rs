//! Fetch the sandbox merchant balance.
//!
//! ```sh
//! IPAYMU_API_KEY=... IPAYMU_VA=... cargo run --example balance
//! ```

use ipaymu::{Client, Environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("IPAYMU_API_KEY")?;
    let virtual_account = std::env::var("IPAYMU_VA")?;

    let client = Client::new(api_key, virtual_account, Environment::Sandbox)?;
    let balance = client.get_balance().await?;

    println!("{:#?}", balance.data);
    Ok(())
}
