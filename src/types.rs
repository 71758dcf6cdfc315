//! Core types for the iPaymu API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Envelope status code the gateway uses for success
pub const STATUS_OK: u16 = 200;

/// Production API base URL
pub const PRODUCTION_BASE_URL: &str = "https://my.ipaymu.com";

/// Sandbox API base URL
pub const SANDBOX_BASE_URL: &str = "https://sandbox.ipaymu.com";

/// Gateway environment selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live gateway
    #[default]
    Production,
    /// Test gateway with simulated settlement
    Sandbox,
}

impl Environment {
    /// Get the fixed base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// Payment method selector for direct and redirect payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Bank virtual-account transfer
    #[serde(rename = "va")]
    Va,
    /// Convenience-store payment code
    #[serde(rename = "cstore")]
    ConStore,
    /// Cash on delivery
    #[serde(rename = "cod")]
    Cod,
}

/// Bank selector for virtual-account payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaChannel {
    Bag,
    Bni,
    #[serde(rename = "cimb")]
    CimbNiaga,
    Mandiri,
    Bri,
    Bca,
    Muamalat,
    Danamon,
}

/// Convenience-store selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConStoreChannel {
    Indomaret,
    Alfamart,
}

/// Courier selector for cash-on-delivery payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodChannel {
    Rpx,
}

/// Unit for the `expired` count on a direct payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiredType {
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// Transaction status filter for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Success,
    Canceled,
    Refund,
    Error,
    Expired,
}

impl TransactionStatus {
    /// Numeric status code on the wire
    pub fn code(&self) -> i8 {
        match self {
            TransactionStatus::Pending => 0,
            TransactionStatus::Success => 1,
            TransactionStatus::Canceled => 2,
            TransactionStatus::Refund => 3,
            TransactionStatus::Error => 4,
            TransactionStatus::Expired => 5,
        }
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Named date-range filter for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    Today,
    Yesterday,
    Week,
    Month,
    Year,
    /// Explicit range; pair with `startdate`/`enddate`
    Custom,
}

/// Sort key for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Id,
    Date,
    Paid,
}

/// Sort direction for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Response language for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Id,
    En,
}

/// Settlement lock filter for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    Unlocked,
    Locked,
}

impl LockStatus {
    /// Numeric lock code on the wire
    pub fn code(&self) -> i8 {
        match self {
            LockStatus::Unlocked => 0,
            LockStatus::Locked => 1,
        }
    }
}

impl Serialize for LockStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Flat product list for direct payments.
///
/// The gateway takes parallel sequences, not a list of records: entry `i` of
/// `product`, `qty` and `price` describes one line item. `push` is the only
/// growth path, which keeps the sequences equal length.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub qty: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub price: Vec<f64>,
}

impl ProductList {
    /// Append one line item
    pub fn push(&mut self, name: impl Into<String>, qty: u32, price: f64) {
        self.product.push(name.into());
        self.qty.push(qty);
        self.price.push(price);
    }

    /// Number of line items
    pub fn len(&self) -> usize {
        self.product.len()
    }

    /// Whether the list has no line items
    pub fn is_empty(&self) -> bool {
        self.product.is_empty()
    }
}

/// Product list with per-item shipping attributes for cash-on-delivery.
///
/// Same parallel-sequence layout as [`ProductList`], extended with weight and
/// package dimensions per entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShippingList {
    #[serde(flatten)]
    pub products: ProductList,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weight: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub width: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub height: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub length: Vec<f32>,
}

impl ShippingList {
    /// Append one line item with its shipping attributes
    #[allow(clippy::too_many_arguments)]
    pub fn push(
        &mut self,
        name: impl Into<String>,
        qty: u32,
        price: f64,
        weight: f32,
        width: f32,
        height: f32,
        length: f32,
    ) {
        self.products.push(name, qty, price);
        self.weight.push(weight);
        self.width.push(width);
        self.height.push(height);
        self.length.push(length);
    }

    /// Number of line items
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the list has no line items
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Shared fields of every direct-payment request
#[derive(Debug, Clone, Serialize)]
pub struct DirectPaymentBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Total amount to collect
    pub amount: f64,
    /// Callback URL the gateway notifies on status changes
    #[serde(rename = "notifyUrl", skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    /// Expiration count, interpreted per `expired_type`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<u32>,
    #[serde(rename = "expiredType", skip_serializing_if = "Option::is_none")]
    pub expired_type: Option<ExpiredType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Caller-supplied reference id echoed back by the gateway
    #[serde(rename = "referenceId", skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
}

impl DirectPaymentBase {
    fn new(payment_method: PaymentMethod, amount: f64) -> Self {
        Self {
            name: None,
            phone: None,
            email: None,
            amount,
            notify_url: None,
            expired: None,
            expired_type: None,
            comments: None,
            reference_id: None,
            payment_method,
        }
    }

    fn with_buyer(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.name = Some(name.into());
        self.phone = Some(phone.into());
        self.email = Some(email.into());
        self
    }

    fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.notify_url = Some(url.into());
        self
    }

    fn with_expiry(mut self, count: u32, unit: ExpiredType) -> Self {
        self.expired = Some(count);
        self.expired_type = Some(unit);
        self
    }

    fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }
}

/// Direct payment through a bank virtual account
#[derive(Debug, Clone, Serialize)]
pub struct DirectVaRequest {
    #[serde(flatten)]
    pub base: DirectPaymentBase,
    #[serde(rename = "paymentChannel")]
    pub payment_channel: VaChannel,
    #[serde(flatten)]
    pub products: ProductList,
}

impl DirectVaRequest {
    /// Create a VA payment request for the given bank channel
    pub fn new(channel: VaChannel, amount: f64) -> Self {
        Self {
            base: DirectPaymentBase::new(PaymentMethod::Va, amount),
            payment_channel: channel,
            products: ProductList::default(),
        }
    }

    /// Set the buyer's identity
    pub fn with_buyer(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.base = self.base.with_buyer(name, phone, email);
        self
    }

    /// Set the notification callback URL
    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.base = self.base.with_notify_url(url);
        self
    }

    /// Set how long the payment code stays payable
    pub fn with_expiry(mut self, count: u32, unit: ExpiredType) -> Self {
        self.base = self.base.with_expiry(count, unit);
        self
    }

    /// Attach a free-text comment
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.base = self.base.with_comments(comments);
        self
    }

    /// Set the caller-supplied reference id
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.base = self.base.with_reference_id(reference_id);
        self
    }

    /// Append one product line
    pub fn add_product(&mut self, name: impl Into<String>, qty: u32, price: f64) {
        self.products.push(name, qty, price);
    }
}

/// Direct payment through a convenience-store code
#[derive(Debug, Clone, Serialize)]
pub struct DirectConStoreRequest {
    #[serde(flatten)]
    pub base: DirectPaymentBase,
    #[serde(rename = "paymentChannel")]
    pub payment_channel: ConStoreChannel,
}

impl DirectConStoreRequest {
    /// Create a convenience-store payment request for the given chain
    pub fn new(channel: ConStoreChannel, amount: f64) -> Self {
        Self {
            base: DirectPaymentBase::new(PaymentMethod::ConStore, amount),
            payment_channel: channel,
        }
    }

    /// Set the buyer's identity
    pub fn with_buyer(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.base = self.base.with_buyer(name, phone, email);
        self
    }

    /// Set the notification callback URL
    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.base = self.base.with_notify_url(url);
        self
    }

    /// Set how long the payment code stays payable
    pub fn with_expiry(mut self, count: u32, unit: ExpiredType) -> Self {
        self.base = self.base.with_expiry(count, unit);
        self
    }

    /// Attach a free-text comment
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.base = self.base.with_comments(comments);
        self
    }

    /// Set the caller-supplied reference id
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.base = self.base.with_reference_id(reference_id);
        self
    }
}

/// Direct payment collected on delivery
#[derive(Debug, Clone, Serialize)]
pub struct DirectCodRequest {
    #[serde(flatten)]
    pub base: DirectPaymentBase,
    #[serde(rename = "paymentChannel")]
    pub payment_channel: CodChannel,
    #[serde(flatten)]
    pub shipping: ShippingList,
    #[serde(rename = "deliveryArea")]
    pub delivery_area: String,
    #[serde(rename = "deliveryAddress")]
    pub delivery_address: String,
}

impl DirectCodRequest {
    /// Create a cash-on-delivery request for the given courier channel
    pub fn new(channel: CodChannel, amount: f64) -> Self {
        Self {
            base: DirectPaymentBase::new(PaymentMethod::Cod, amount),
            payment_channel: channel,
            shipping: ShippingList::default(),
            delivery_area: String::new(),
            delivery_address: String::new(),
        }
    }

    /// Set the delivery destination
    pub fn with_delivery(
        mut self,
        area: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        self.delivery_area = area.into();
        self.delivery_address = address.into();
        self
    }

    /// Set the buyer's identity
    pub fn with_buyer(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.base = self.base.with_buyer(name, phone, email);
        self
    }

    /// Set the notification callback URL
    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.base = self.base.with_notify_url(url);
        self
    }

    /// Set how long the order stays payable
    pub fn with_expiry(mut self, count: u32, unit: ExpiredType) -> Self {
        self.base = self.base.with_expiry(count, unit);
        self
    }

    /// Attach a free-text comment
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.base = self.base.with_comments(comments);
        self
    }

    /// Set the caller-supplied reference id
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.base = self.base.with_reference_id(reference_id);
        self
    }

    /// Append one product line with its shipping attributes
    #[allow(clippy::too_many_arguments)]
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        qty: u32,
        price: f64,
        weight: f32,
        width: f32,
        height: f32,
        length: f32,
    ) {
        self.shipping.push(name, qty, price, weight, width, height, length);
    }
}

/// Hosted-checkout payment request.
///
/// Standalone shape: the payer is redirected to a gateway-hosted page, so the
/// request carries return/cancel/notify URLs instead of the direct-payment
/// base fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RedirectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "returnUrl", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(rename = "notifyUrl", skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(rename = "cancelUrl", skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(rename = "referenceId", skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    pub product: Vec<String>,
    pub qty: Vec<u32>,
    pub price: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weight: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension: Vec<String>,
    #[serde(rename = "buyerName", skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(rename = "buyerEmail", skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(rename = "buyerPhone", skip_serializing_if = "Option::is_none")]
    pub buyer_phone: Option<String>,
    #[serde(rename = "pickupArea", skip_serializing_if = "Option::is_none")]
    pub pickup_area: Option<String>,
    #[serde(rename = "pickupAddress", skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,
    #[serde(rename = "paymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl RedirectRequest {
    /// Create an empty hosted-checkout request
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one product line; weight and dimension only when the item ships
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        qty: u32,
        price: f64,
        weight: Option<f32>,
        dimension: Option<String>,
    ) {
        self.product.push(name.into());
        self.qty.push(qty);
        self.price.push(price);
        if let Some(weight) = weight {
            self.weight.push(weight);
        }
        if let Some(dimension) = dimension {
            self.dimension.push(dimension);
        }
    }

    /// Set the buyer's identity
    pub fn with_buyer(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.buyer_name = Some(name.into());
        self.buyer_phone = Some(phone.into());
        self.buyer_email = Some(email.into());
        self
    }

    /// Set the order description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the URL the payer lands on after completing checkout
    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    /// Set the notification callback URL
    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.notify_url = Some(url.into());
        self
    }

    /// Set the URL the payer lands on after cancelling checkout
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Set the caller-supplied reference id
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    /// Set the pickup origin for shipped orders
    pub fn with_pickup(
        mut self,
        area: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        self.pickup_area = Some(area.into());
        self.pickup_address = Some(address.into());
        self
    }

    /// Restrict checkout to a single payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }
}

/// Transaction-history query.
///
/// Every field is an optional filter. Absent fields are omitted from the
/// serialized body entirely; the gateway treats presence as an explicit
/// filter, so `null` would not mean "unfiltered".
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionHistoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateFilter>,
    #[serde(rename = "startdate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "enddate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "orderBy", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Page size; the gateway caps this at 20
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
    /// Comma-joined transaction id list
    #[serde(rename = "bulkId", skip_serializing_if = "Option::is_none")]
    pub bulk_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(rename = "lockStatus", skip_serializing_if = "Option::is_none")]
    pub lock_status: Option<LockStatus>,
}

impl TransactionHistoryRequest {
    /// Create an unfiltered history query
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by a single transaction id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Filter by transaction status
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by a named date range
    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = Some(date);
        self
    }

    /// Filter by an explicit date range (Y-m-d on the wire)
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Select a result page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the sort key
    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Set the sort direction
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the response language
    pub fn with_language(mut self, lang: Language) -> Self {
        self.lang = Some(lang);
        self
    }

    /// Filter by a set of transaction ids, comma-joined on the wire
    pub fn with_bulk_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.bulk_id = Some(
            ids.into_iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        );
        self
    }

    /// Filter by virtual account
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Filter by settlement lock status
    pub fn with_lock_status(mut self, lock_status: LockStatus) -> Self {
        self.lock_status = Some(lock_status);
        self
    }
}

/// Uniform response envelope.
///
/// Every endpoint answers `{Status, Success, Message, Data}` with an
/// endpoint-specific `Data` payload. `Status` 200 means success; any other
/// value is a domain-level failure even when the HTTP exchange succeeded.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "Status")]
    pub status: u16,
    #[serde(rename = "Success", default)]
    pub success: bool,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "Data")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Merchant balance payload
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    #[serde(rename = "Va", default)]
    pub va: String,
    #[serde(rename = "Balance", default)]
    pub balance: f64,
    #[serde(rename = "Pending", default)]
    pub pending: Option<f64>,
    #[serde(rename = "MerchantName", default)]
    pub merchant_name: Option<String>,
}

/// Created-payment payload for direct and redirect payments.
///
/// The gateway answers both flows with one shape; `url` is only present for
/// hosted checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentData {
    #[serde(rename = "SessionId", alias = "SessionID", default)]
    pub session_id: Option<String>,
    #[serde(rename = "TransactionId", default)]
    pub transaction_id: Option<i64>,
    #[serde(rename = "ReferenceId", default)]
    pub reference_id: Option<String>,
    #[serde(rename = "Via", default)]
    pub via: Option<String>,
    #[serde(rename = "Channel", default)]
    pub channel: Option<String>,
    /// Number the payer transfers to or quotes at the counter
    #[serde(rename = "PaymentNo", default)]
    pub payment_no: Option<String>,
    #[serde(rename = "PaymentName", default)]
    pub payment_name: Option<String>,
    #[serde(rename = "SubTotal", default)]
    pub sub_total: Option<f64>,
    #[serde(rename = "Fee", default)]
    pub fee: Option<f64>,
    #[serde(rename = "Total", default)]
    pub total: Option<f64>,
    #[serde(rename = "Expired", default)]
    pub expired: Option<String>,
    #[serde(rename = "Escrow", default)]
    pub escrow: Option<bool>,
    /// Hosted checkout URL (redirect flow only)
    #[serde(rename = "Url", default)]
    pub url: Option<String>,
}

/// Single transaction detail payload
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionData {
    #[serde(rename = "TransactionId", default)]
    pub transaction_id: Option<i64>,
    #[serde(rename = "SessionId", alias = "SessionID", default)]
    pub session_id: Option<String>,
    #[serde(rename = "ReferenceId", default)]
    pub reference_id: Option<String>,
    #[serde(rename = "Sender", default)]
    pub sender: Option<String>,
    #[serde(rename = "Receiver", default)]
    pub receiver: Option<String>,
    #[serde(rename = "Type", default)]
    pub transaction_type: Option<i32>,
    #[serde(rename = "TypeDesc", default)]
    pub type_desc: Option<String>,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
    #[serde(rename = "Fee", default)]
    pub fee: Option<f64>,
    #[serde(rename = "Status", default)]
    pub status: Option<i32>,
    #[serde(rename = "StatusDesc", default)]
    pub status_desc: Option<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
    #[serde(rename = "CreatedDate", default)]
    pub created_date: Option<String>,
    #[serde(rename = "ExpiredDate", default)]
    pub expired_date: Option<String>,
    #[serde(rename = "PaidDate", default)]
    pub paid_date: Option<String>,
    #[serde(rename = "SettlementDate", default)]
    pub settlement_date: Option<String>,
}

/// Transaction-history payload
#[derive(Debug, Clone, Deserialize)]
pub struct History {
    #[serde(rename = "Transaction", default)]
    pub transactions: Vec<TransactionData>,
    #[serde(rename = "CountAll", default)]
    pub count_all: Option<i64>,
    #[serde(rename = "Page", default)]
    pub page: Option<i64>,
    #[serde(rename = "TotalPage", default)]
    pub total_page: Option<i64>,
}

/// One entry of the payment-method listing
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodInfo {
    #[serde(rename = "Code", default)]
    pub code: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Channels", default)]
    pub channels: Vec<ChannelInfo>,
}

/// One payment channel under a payment method
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelInfo {
    #[serde(rename = "Code", default)]
    pub code: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

/// Balance inquiry response
pub type BalanceResponse = ApiResponse<Balance>;
/// Transaction status lookup response
pub type CheckTransactionResponse = ApiResponse<TransactionData>;
/// Transaction history response
pub type TransactionHistoryResponse = ApiResponse<History>;
/// Payment-method listing response
pub type PaymentMethodListResponse = ApiResponse<Vec<PaymentMethodInfo>>;
/// Created-payment response for direct and redirect payments
pub type PaymentResponse = ApiResponse<PaymentData>;

/// Payload the gateway POSTs to a merchant's notify URL on status changes.
///
/// This crate only types the payload; hosting the webhook endpoint is the
/// caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackNotification {
    pub trx_id: i64,
    pub status: String,
    pub status_code: i32,
    pub sid: String,
    pub reference_id: String,
}

/// Untyped response envelope, for callers probing new endpoints
pub type RawResponse = ApiResponse<Value>;
