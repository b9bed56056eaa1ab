//! Webhook payload types.

use serde::{Deserialize, Serialize};

/// Body of every Paystack webhook: an event name and its data object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent<T> {
    pub event: String,
    pub data: T,
}

/// Event names Paystack sends in [`WebhookEvent::event`].
pub mod events {
    pub const CHARGE_SUCCESS: &str = "charge.success";
    pub const CHARGE_DISPUTE_CREATE: &str = "charge.dispute.create";
    pub const CHARGE_DISPUTE_REMIND: &str = "charge.dispute.remind";
    pub const CHARGE_DISPUTE_RESOLVE: &str = "charge.dispute.resolve";
    pub const CUSTOMER_IDENTIFICATION_SUCCESS: &str = "customeridentification.success";
    pub const CUSTOMER_IDENTIFICATION_FAILED: &str = "customeridentification.failed";
    pub const DEDICATED_ACCOUNT_ASSIGN_SUCCESS: &str = "dedicatedaccount.assign.success";
    pub const DEDICATED_ACCOUNT_ASSIGN_FAILED: &str = "dedicatedaccount.assign.failed";
    pub const INVOICE_CREATE: &str = "invoice.create";
    pub const INVOICE_PAYMENT_FAILED: &str = "invoice.payment_failed";
    pub const INVOICE_UPDATE: &str = "invoice.update";
    pub const PAYMENT_REQUEST_PENDING: &str = "paymentrequest.pending";
    pub const PAYMENT_REQUEST_SUCCESS: &str = "paymentrequest.success";
    pub const REFUND_FAILED: &str = "refund.failed";
    pub const REFUND_PENDING: &str = "refund.pending";
    pub const REFUND_PROCESSED: &str = "refund.processed";
    pub const REFUND_PROCESSING: &str = "refund.processing";
    pub const SUBSCRIPTION_CREATE: &str = "subscription.create";
    pub const SUBSCRIPTION_DISABLE: &str = "subscription.disable";
    pub const SUBSCRIPTION_EXPIRING_CARDS: &str = "subscription.expiring_cards";
    pub const SUBSCRIPTION_NOT_RENEW: &str = "subscription.not_renew";
    pub const TRANSFER_FAILED: &str = "transfer.failed";
    pub const TRANSFER_SUCCESS: &str = "transfer.success";
    pub const TRANSFER_REVERSED: &str = "transfer.reversed";
}
