//! Split-payment and terminal request types.

use serde::{Deserialize, Serialize};

/// One subaccount's share of a transaction split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaccountShare {
    pub subaccount: String,
    /// Percentage or flat amount, depending on the split type.
    pub share: u64,
}

/// A WhatsApp number notified about virtual terminal payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub target: String,
    pub name: String,
}
