//! Create a sandbox virtual-account payment and print the payment number.

use ipaymu::{Client, DirectVaRequest, Environment, ExpiredType, VaChannel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("IPAYMU_API_KEY")?;
    let virtual_account = std::env::var("IPAYMU_VA")?;

    let client = Client::new(api_key, virtual_account, Environment::Sandbox)?;

    let mut request = DirectVaRequest::new(VaChannel::CimbNiaga, 100_000.0)
        .with_buyer("buyer", "08123456789", "buyer@example.com")
        .with_notify_url("http://localhost/notify-url")
        .with_expiry(24, ExpiredType::Hours)
        .with_reference_id("demo-order-1");
    request.add_product("demo product", 1, 100_000.0);

    let response = client.direct_payment_va(&request).await?;
    println!("{:#?}", response.data);
    Ok(())
}
