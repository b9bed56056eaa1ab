//! Closed value sets Paystack accepts in request payloads.
//!
//! Every enum converts into `String` so it can be handed straight to the
//! matching [`OptionalParam`](crate::params::OptionalParam) helper.

use serde::{Deserialize, Serialize};

macro_rules! wire_str {
    ($ty:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_owned()
            }
        }
    };
}

/// Settlement currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ngn,
    Ghs,
    Zar,
    Kes,
    Usd,
    Xof,
    Egp,
}

wire_str!(Currency {
    Ngn => "NGN",
    Ghs => "GHS",
    Zar => "ZAR",
    Kes => "KES",
    Usd => "USD",
    Xof => "XOF",
    Egp => "EGP",
});

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

wire_str!(Interval {
    Hourly => "hourly",
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
    Quarterly => "quarterly",
    Biannually => "biannually",
    Annually => "annually",
});

/// Payment channels a checkout may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Card,
    Bank,
    Ussd,
    Qr,
    MobileMoney,
    BankTransfer,
    Eft,
    ApplePay,
}

wire_str!(Channel {
    Card => "card",
    Bank => "bank",
    Ussd => "ussd",
    Qr => "qr",
    MobileMoney => "mobile_money",
    BankTransfer => "bank_transfer",
    Eft => "eft",
    ApplePay => "apple_pay",
});

/// Who bears the Paystack fee on a split payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bearer {
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "subaccount")]
    Subaccount,
    #[serde(rename = "all-proportional")]
    AllProportional,
    #[serde(rename = "all")]
    All,
}

wire_str!(Bearer {
    Account => "account",
    Subaccount => "subaccount",
    AllProportional => "all-proportional",
    All => "all",
});

/// Customer risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Default,
    Allow,
    Deny,
}

wire_str!(RiskAction {
    Default => "default",
    Allow => "allow",
    Deny => "deny",
});
