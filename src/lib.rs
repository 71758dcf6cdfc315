//! # ipaymu - iPaymu payment gateway client
//!
//! A Rust client for the iPaymu REST API (v2). The crate builds signed
//! requests for payment operations - direct payment via virtual account,
//! convenience store or cash-on-delivery, hosted-checkout redirect payment,
//! balance inquiry, transaction lookup and history, and payment-method
//! listing - and decodes the gateway's typed JSON responses.
//!
//! Every request is authenticated with an HMAC-SHA256 signature over a
//! canonical string binding the HTTP method, the merchant's virtual account,
//! the body hash and the API key; the key itself never travels in the clear.
//!
//! ## Example
//!
//! ```no_run
//! use ipaymu::{Client, Environment};
//!
//! # async fn run() -> ipaymu::Result<()> {
//! let client = Client::new("your-api-key", "1179000899", Environment::Sandbox)?;
//! let balance = client.get_balance().await?;
//! println!("balance: {:?}", balance.data);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error contract
//!
//! Operations fail with [`IpaymuError::Http`] on transport errors,
//! [`IpaymuError::Json`] on malformed responses, and [`IpaymuError::Api`]
//! when the gateway's envelope reports a non-200 status. The `Api` variant
//! keeps the complete decoded body: some failure replies still carry a
//! payload worth reading, and callers may do so through
//! [`ApiError::decode`](error::ApiError::decode).

pub mod client;
pub mod crypto;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::{Client, ClientBuilder};
pub use error::{ApiError, IpaymuError, Result};
pub use types::*;

/// Current version of the ipaymu library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
