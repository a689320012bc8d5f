//! Column-name constants for the order dataset schema.
//! Single source of truth for loader, filter and analysis code.

/// Order identifier; repeats once per item or payment installment.
pub const ORDER_ID: &str = "order_id";

/// Customer identifier; repeats across that customer's orders.
pub const CUSTOMER_ID: &str = "customer_id";

/// Merchandising category of the purchased product.
pub const PRODUCT_CATEGORY: &str = "product_category_name";

/// Payment method label (credit card, boleto, voucher, ...).
pub const PAYMENT_TYPE: &str = "payment_type";

/// Monetary amount of the row.
pub const PAYMENT_VALUE: &str = "payment_value";

/// Two-letter state of the customer's address.
pub const CUSTOMER_STATE: &str = "customer_state";

// ── Timestamp columns ───────────────────────────────────────────────────────

/// Purchase time; the basis of RFM recency.
pub const ORDER_PURCHASE_TS: &str = "order_purchase_timestamp";

/// Payment approval time; the default date-filter column.
pub const ORDER_APPROVED_AT: &str = "order_approved_at";

pub const ORDER_DELIVERED_CARRIER: &str = "order_delivered_carrier_date";
pub const ORDER_DELIVERED_CUSTOMER: &str = "order_delivered_customer_date";
pub const ORDER_ESTIMATED_DELIVERY: &str = "order_estimated_delivery_date";
pub const SHIPPING_LIMIT: &str = "shipping_limit_date_y";

/// Columns the loader parses as `Datetime`.
pub const DATETIME_COLUMNS: [&str; 6] = [
    ORDER_PURCHASE_TS,
    ORDER_APPROVED_AT,
    ORDER_DELIVERED_CARRIER,
    ORDER_DELIVERED_CUSTOMER,
    ORDER_ESTIMATED_DELIVERY,
    SHIPPING_LIMIT,
];

/// Every column the dataset must carry; a missing one fails the load.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    ORDER_ID,
    CUSTOMER_ID,
    PRODUCT_CATEGORY,
    PAYMENT_TYPE,
    PAYMENT_VALUE,
    CUSTOMER_STATE,
    ORDER_PURCHASE_TS,
    ORDER_APPROVED_AT,
    ORDER_DELIVERED_CARRIER,
    ORDER_DELIVERED_CUSTOMER,
    ORDER_ESTIMATED_DELIVERY,
    SHIPPING_LIMIT,
];

/// Timestamp layout used throughout the dataset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
