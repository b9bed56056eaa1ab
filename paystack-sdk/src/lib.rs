//! Async client for the Paystack payments API.
//!
//! The crate is split into three layers:
//!
//! * [`client::Client`] – the dispatch core. Holds the base URL, secret key
//!   and HTTP transport, and performs one authenticated round trip per call.
//! * [`client`] facades – one type per remote resource family
//!   ([`client::Transactions`], [`client::Plans`], …) that assemble a
//!   [`params::Payload`] and a path, then delegate to the dispatch core.
//! * [`Paystack`] – a bundle exposing every facade as a field, all sharing
//!   one [`client::Client`].
//!
//! HTTP error statuses are **not** turned into errors: a `404` comes back as
//! an ordinary [`client::Response`] with `status == 404`. Only failures to
//! complete the round trip are reported through [`client::ClientError`].
//!
//! ```ignore
//! use paystack_sdk::Paystack;
//! use paystack_sdk::params::OptionalParam;
//!
//! let paystack = Paystack::with_secret_key("sk_test_xxx")?;
//! let resp = paystack
//!     .transactions
//!     .initialize("customer@example.com", 50_000, [OptionalParam::currency("NGN")])
//!     .await?;
//! println!("{} {}", resp.status(), resp.text());
//! ```

pub mod client;
pub mod objects;
pub mod params;
pub mod signature;

use client::{
    ApplePay, BulkCharges, Charges, Client, ClientError, Customers, DedicatedAccounts, Disputes,
    Integration, Miscellaneous, PaymentPages, PaymentRequests, Plans, Products, Refunds,
    Settlements, Subaccounts, Subscriptions, Terminals, TransactionSplits, Transactions,
    TransferControl, TransferRecipients, Transfers, Verification, VirtualTerminals,
};

/// Every Paystack resource facade, built from one shared [`Client`].
///
/// Cloning the bundle is cheap; all facades point at the same configuration.
#[derive(Debug, Clone)]
pub struct Paystack {
    pub apple_pay: ApplePay,
    pub bulk_charges: BulkCharges,
    pub charges: Charges,
    pub customers: Customers,
    pub dedicated_accounts: DedicatedAccounts,
    pub disputes: Disputes,
    pub integration: Integration,
    pub miscellaneous: Miscellaneous,
    pub payment_pages: PaymentPages,
    pub payment_requests: PaymentRequests,
    pub plans: Plans,
    pub products: Products,
    pub refunds: Refunds,
    pub settlements: Settlements,
    pub subaccounts: Subaccounts,
    pub subscriptions: Subscriptions,
    pub terminals: Terminals,
    pub transaction_splits: TransactionSplits,
    pub transactions: Transactions,
    pub transfer_control: TransferControl,
    pub transfer_recipients: TransferRecipients,
    pub transfers: Transfers,
    pub verification: Verification,
    pub virtual_terminals: VirtualTerminals,
    client: Client,
}

impl Paystack {
    /// Build every facade on top of `client`.
    pub fn new(client: Client) -> Self {
        Self {
            apple_pay: ApplePay::new(client.clone()),
            bulk_charges: BulkCharges::new(client.clone()),
            charges: Charges::new(client.clone()),
            customers: Customers::new(client.clone()),
            dedicated_accounts: DedicatedAccounts::new(client.clone()),
            disputes: Disputes::new(client.clone()),
            integration: Integration::new(client.clone()),
            miscellaneous: Miscellaneous::new(client.clone()),
            payment_pages: PaymentPages::new(client.clone()),
            payment_requests: PaymentRequests::new(client.clone()),
            plans: Plans::new(client.clone()),
            products: Products::new(client.clone()),
            refunds: Refunds::new(client.clone()),
            settlements: Settlements::new(client.clone()),
            subaccounts: Subaccounts::new(client.clone()),
            subscriptions: Subscriptions::new(client.clone()),
            terminals: Terminals::new(client.clone()),
            transaction_splits: TransactionSplits::new(client.clone()),
            transactions: Transactions::new(client.clone()),
            transfer_control: TransferControl::new(client.clone()),
            transfer_recipients: TransferRecipients::new(client.clone()),
            transfers: Transfers::new(client.clone()),
            verification: Verification::new(client.clone()),
            virtual_terminals: VirtualTerminals::new(client.clone()),
            client,
        }
    }

    /// Shortcut for a production client authenticated with `secret_key`.
    pub fn with_secret_key(secret_key: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self::new(Client::builder().secret_key(secret_key).build()?))
    }

    /// Build from `PAYSTACK_SECRET_KEY` / `PAYSTACK_BASE_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self::new(Client::builder().from_env().build()?))
    }

    /// The dispatch core shared by every facade, for endpoints this crate
    /// does not wrap yet.
    pub fn client(&self) -> &Client {
        &self.client
    }
}
