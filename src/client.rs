//! Gateway client: transport, request signing and the endpoint operations

use crate::crypto::generate_signature;
use crate::error::{ApiError, IpaymuError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BALANCE_PATH: &str = "/api/v2/balance";
const TRANSACTION_PATH: &str = "/api/v2/transaction";
const HISTORY_PATH: &str = "/api/v2/history";
const PAYMENT_METHOD_LIST_PATH: &str = "/api/v2/payment-method-list";
const DIRECT_PAYMENT_PATH: &str = "/api/v2/payment/direct";
// The trailing slash is part of the gateway contract.
const REDIRECT_PAYMENT_PATH: &str = "/api/v2/payment/";

const VA_HEADER: &str = "va";
const SIGNATURE_HEADER: &str = "signature";

/// iPaymu API client.
///
/// Credentials are fixed at construction; a built client never exists in a
/// half-configured state. The client is cheap to clone and safe to share
/// across tasks: clones reuse one connection pool, and no call mutates
/// client state.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    virtual_account: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the given environment with default settings
    pub fn new(
        api_key: impl Into<String>,
        virtual_account: impl Into<String>,
        environment: Environment,
    ) -> Result<Self> {
        Self::builder(api_key, virtual_account)
            .environment(environment)
            .build()
    }

    /// Start building a client with custom settings
    pub fn builder(
        api_key: impl Into<String>,
        virtual_account: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            virtual_account: virtual_account.into(),
            environment: Environment::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Get the virtual account this client signs requests for
    pub fn virtual_account(&self) -> &str {
        &self.virtual_account
    }

    /// Get the base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieve the merchant balance for the client's virtual account
    pub async fn get_balance(&self) -> Result<BalanceResponse> {
        let body = json!({ "account": self.virtual_account });
        self.invoke(BALANCE_PATH, &body).await
    }

    /// Look up the status of a single transaction by id
    pub async fn check_transaction(&self, transaction_id: i64) -> Result<CheckTransactionResponse> {
        let body = json!({ "transactionId": transaction_id });
        self.invoke(TRANSACTION_PATH, &body).await
    }

    /// Query transaction history with the given filters
    pub async fn history_transaction(
        &self,
        request: &TransactionHistoryRequest,
    ) -> Result<TransactionHistoryResponse> {
        self.invoke(HISTORY_PATH, request).await
    }

    /// List the payment methods and channels available to this account
    pub async fn list_payment_method(&self) -> Result<PaymentMethodListResponse> {
        let body = json!({ "request": true });
        self.invoke(PAYMENT_METHOD_LIST_PATH, &body).await
    }

    /// Create a direct payment against a bank virtual account
    pub async fn direct_payment_va(&self, request: &DirectVaRequest) -> Result<PaymentResponse> {
        self.invoke(DIRECT_PAYMENT_PATH, request).await
    }

    /// Create a direct payment collected at a convenience store
    pub async fn direct_payment_cstore(
        &self,
        request: &DirectConStoreRequest,
    ) -> Result<PaymentResponse> {
        self.invoke(DIRECT_PAYMENT_PATH, request).await
    }

    /// Create a direct payment collected on delivery
    pub async fn direct_payment_cod(&self, request: &DirectCodRequest) -> Result<PaymentResponse> {
        self.invoke(DIRECT_PAYMENT_PATH, request).await
    }

    /// Create a hosted-checkout payment and get its redirect URL
    pub async fn redirect_payment(&self, request: &RedirectRequest) -> Result<PaymentResponse> {
        self.invoke(REDIRECT_PAYMENT_PATH, request).await
    }

    /// Issue one signed POST and return the raw response bytes.
    ///
    /// The HTTP status is not inspected: the gateway carries its verdict in
    /// the response envelope, so the body is drained and returned as-is.
    /// Fails only on transport-level errors (network, DNS, timeout).
    pub async fn call_api(&self, url: &str, signature: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!(%url, "issuing signed gateway request");
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(VA_HEADER, &self.virtual_account)
            .header(SIGNATURE_HEADER, signature)
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let raw = response.bytes().await?;
        Ok(raw.to_vec())
    }

    /// The uniform per-endpoint protocol: serialize, sign, POST, decode,
    /// classify.
    async fn invoke<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let payload = serde_json::to_vec(body)?;
        let signature = generate_signature(&payload, &self.virtual_account, &self.api_key);
        let raw = self.call_api(&url, &signature, payload).await?;
        classify(&raw)
    }
}

/// Decode a response envelope and apply the status policy.
///
/// Status 200 passes the envelope through. Any other status becomes an
/// [`ApiError`] that keeps the complete decoded body, since failed replies
/// can still carry a payload worth reading.
fn classify<T: DeserializeOwned>(raw: &[u8]) -> Result<ApiResponse<T>> {
    let response: ApiResponse<T> = serde_json::from_slice(raw)?;
    if response.is_success() {
        return Ok(response);
    }

    warn!(
        status = response.status,
        message = %response.message,
        "gateway reported a failure status"
    );
    let body = serde_json::from_slice(raw).unwrap_or(Value::Null);
    Err(IpaymuError::Api(ApiError {
        status: response.status,
        message: response.message,
        body,
    }))
}

/// Builder for [`Client`]
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    virtual_account: String,
    environment: Environment,
    base_url: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Select the target environment
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL, e.g. to point at a local test server
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration and build the client
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(base_url) => {
                let parsed = Url::parse(&base_url).map_err(|e| {
                    IpaymuError::config(format!("invalid base URL {base_url:?}: {e}"))
                })?;
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(IpaymuError::config(format!(
                        "base URL must use http or https, got {:?}",
                        parsed.scheme()
                    )));
                }
                base_url.trim_end_matches('/').to_string()
            }
            None => self.environment.base_url().to_string(),
        };

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| IpaymuError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Client {
            api_key: self.api_key,
            virtual_account: self.virtual_account,
            base_url,
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const API_KEY: &str = "QbGcoO0Qds9sQFDmY0MWg1Tq.xtuh1";
    const VIRTUAL_ACCOUNT: &str = "1179000899";

    fn test_client(base_url: &str) -> Client {
        Client::builder(API_KEY, VIRTUAL_ACCOUNT)
            .base_url(base_url)
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_creation_resolves_environment() {
        let client = Client::new(API_KEY, VIRTUAL_ACCOUNT, Environment::Sandbox).unwrap();
        assert_eq!(client.base_url(), SANDBOX_BASE_URL);
        assert_eq!(client.virtual_account(), VIRTUAL_ACCOUNT);

        let client = Client::new(API_KEY, VIRTUAL_ACCOUNT, Environment::Production).unwrap();
        assert_eq!(client.base_url(), PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = Client::builder(API_KEY, VIRTUAL_ACCOUNT)
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(IpaymuError::Config { .. })));

        let result = Client::builder(API_KEY, VIRTUAL_ACCOUNT)
            .base_url("ftp://example.com")
            .build();
        assert!(matches!(result, Err(IpaymuError::Config { .. })));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = Client::builder(API_KEY, VIRTUAL_ACCOUNT)
            .base_url("https://gateway.example.com/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://gateway.example.com");
    }

    #[test]
    fn test_classify_success() {
        let raw = br#"{"Status": 200, "Success": true, "Message": "Success", "Data": null}"#;
        let response: ApiResponse<Value> = classify(raw).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.message, "Success");
    }

    #[test]
    fn test_classify_domain_failure_keeps_body() {
        let raw = br#"{"Status": 402, "Success": false, "Message": "Insufficient balance", "Data": {"Balance": 0.0}}"#;
        let err = classify::<Value>(raw).unwrap_err();
        let api = err.as_api().expect("domain error expected");
        assert_eq!(api.status, 402);
        assert_eq!(api.message, "Insufficient balance");
        assert_eq!(api.body["Data"]["Balance"], 0.0);
        assert_eq!(err.to_string(), "Insufficient balance");
    }

    #[test]
    fn test_classify_rejects_malformed_body() {
        let err = classify::<Value>(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, IpaymuError::Json(_)));
    }

    #[tokio::test]
    async fn test_get_balance_signs_and_decodes() {
        let mut server = Server::new_async().await;

        let expected_body = format!(r#"{{"account":"{VIRTUAL_ACCOUNT}"}}"#);
        let expected_signature =
            generate_signature(expected_body.as_bytes(), VIRTUAL_ACCOUNT, API_KEY);

        let _m = server
            .mock("POST", "/api/v2/balance")
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .match_header("va", VIRTUAL_ACCOUNT)
            .match_header("signature", expected_signature.as_str())
            .match_body(Matcher::JsonString(expected_body.clone()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "Status": 200,
                    "Success": true,
                    "Message": "Success",
                    "Data": {"Va": VIRTUAL_ACCOUNT, "Balance": 250000.0}
                })
                .to_string(),
            )
            .create();

        let client = test_client(&server.url());
        let response = client.get_balance().await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.data.unwrap().balance, 250000.0);
    }

    #[tokio::test]
    async fn test_check_transaction_path_and_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/v2/transaction")
            .match_body(Matcher::Json(json!({"transactionId": 96748})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "Status": 200,
                    "Success": true,
                    "Message": "Success",
                    "Data": {"TransactionId": 96748, "Status": 1, "StatusDesc": "berhasil"}
                })
                .to_string(),
            )
            .create();

        let client = test_client(&server.url());
        let response = client.check_transaction(96748).await.unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.transaction_id, Some(96748));
        assert_eq!(data.status, Some(1));
    }

    #[tokio::test]
    async fn test_history_sends_sparse_body() {
        let mut server = Server::new_async().await;
        // only the status filter may appear on the wire
        let _m = server
            .mock("POST", "/api/v2/history")
            .match_body(Matcher::JsonString(r#"{"status":1}"#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "Status": 200,
                    "Success": true,
                    "Message": "Success",
                    "Data": {"Transaction": [{"TransactionId": 68369}], "CountAll": 1}
                })
                .to_string(),
            )
            .create();

        let client = test_client(&server.url());
        let request = TransactionHistoryRequest::new().with_status(TransactionStatus::Success);
        let response = client.history_transaction(&request).await.unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.transactions.len(), 1);
        assert_eq!(data.count_all, Some(1));
    }

    #[tokio::test]
    async fn test_list_payment_method_constant_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/v2/payment-method-list")
            .match_body(Matcher::JsonString(r#"{"request":true}"#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "Status": 200,
                    "Success": true,
                    "Message": "Success",
                    "Data": [
                        {"Code": "va", "Name": "Virtual Account", "Channels": [
                            {"Code": "bca", "Name": "BCA"},
                            {"Code": "bni", "Name": "BNI"}
                        ]}
                    ]
                })
                .to_string(),
            )
            .create();

        let client = test_client(&server.url());
        let response = client.list_payment_method().await.unwrap();
        let methods = response.data.unwrap();
        assert_eq!(methods[0].code, "va");
        assert_eq!(methods[0].channels.len(), 2);
    }

    #[tokio::test]
    async fn test_direct_payment_variants_share_path() {
        let mut server = Server::new_async().await;
        let created = json!({
            "Status": 200,
            "Success": true,
            "Message": "Success",
            "Data": {"SessionId": "s-1", "TransactionId": 1, "PaymentNo": "8808000000000001"}
        });
        let _m = server
            .mock("POST", "/api/v2/payment/direct")
            .expect(3)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(created.to_string())
            .create();

        let client = test_client(&server.url());

        let va = DirectVaRequest::new(VaChannel::Bca, 100_000.0);
        assert!(client.direct_payment_va(&va).await.unwrap().is_success());

        let cstore = DirectConStoreRequest::new(ConStoreChannel::Indomaret, 50_000.0);
        assert!(client.direct_payment_cstore(&cstore).await.unwrap().is_success());

        let cod = DirectCodRequest::new(CodChannel::Rpx, 80_000.0)
            .with_delivery("Jakarta", "Jl. Sudirman No. 1");
        assert!(client.direct_payment_cod(&cod).await.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_redirect_payment_uses_trailing_slash_path() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/v2/payment/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "Status": 200,
                    "Success": true,
                    "Message": "Success",
                    "Data": {"SessionID": "s-2", "Url": "https://sandbox.ipaymu.com/payment/s-2"}
                })
                .to_string(),
            )
            .create();

        let client = test_client(&server.url());
        let mut request = RedirectRequest::new().with_reference_id("order-1");
        request.add_product("ebook", 1, 45_000.0, None, None);

        let response = client.redirect_payment(&request).await.unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.session_id.as_deref(), Some("s-2"));
        assert_eq!(
            data.url.as_deref(),
            Some("https://sandbox.ipaymu.com/payment/s-2")
        );
    }

    #[tokio::test]
    async fn test_domain_failure_surfaces_message_and_payload() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/v2/balance")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "Status": 402,
                    "Success": false,
                    "Message": "Insufficient balance",
                    "Data": {"Va": VIRTUAL_ACCOUNT, "Balance": 0.0}
                })
                .to_string(),
            )
            .create();

        let client = test_client(&server.url());
        let err = client.get_balance().await.unwrap_err();
        let api = err.as_api().expect("domain error expected");
        assert_eq!(api.status, 402);
        assert_eq!(api.message, "Insufficient balance");
        // failed reply still carries its payload
        let envelope: BalanceResponse = api.decode().unwrap();
        assert_eq!(envelope.data.unwrap().balance, 0.0);
    }

    #[tokio::test]
    async fn test_decode_failure_is_distinct_from_domain_failure() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/v2/balance")
            .with_status(200)
            .with_body("definitely not json")
            .create();

        let client = test_client(&server.url());
        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(err, IpaymuError::Json(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_without_decode() {
        // nothing listens on port 9; connection is refused before any body exists
        let client = Client::builder(API_KEY, VIRTUAL_ACCOUNT)
            .base_url("http://127.0.0.1:9")
            .timeout(Duration::from_millis(250))
            .build()
            .unwrap();

        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(err, IpaymuError::Http(_)));
    }
}
