use crate::codec::WireCode;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares `TransactionType` together with everything derived from its variant list, so a new
/// type is added in exactly one place: the invocation below.
macro_rules! transaction_types {
    ($( $(#[$meta:meta])* $variant:ident = $code:literal ),+ $(,)?) => {
        /// Types of transactions on the XRP Ledger.
        ///
        /// This is a partial list. Every exhaustive `match` over this type has to be revisited
        /// when a variant is added.
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum TransactionType {
            $( $(#[$meta])* $variant, )+
        }

        impl TransactionType {
            /// Every declared variant, in declaration order
            pub const ALL: [TransactionType; [$(stringify!($variant)),+].len()] =
                [$(TransactionType::$variant),+];

            /// Value of the `TransactionType` field on the wire
            pub const fn wire_code(self) -> WireCode {
                match self {
                    $( TransactionType::$variant => WireCode($code), )+
                }
            }

            /// Canonical JSON name, identical to the serde representation
            pub const fn canonical_name(self) -> &'static str {
                match self {
                    $( TransactionType::$variant => stringify!($variant), )+
                }
            }
        }
    };
}

// See https://xrpl.org/transaction-types.html for codes
transaction_types! {
    /// Moves value from one account to another
    Payment = 0,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.canonical_name());
    }
}
