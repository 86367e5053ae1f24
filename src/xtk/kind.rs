use crate::codec::{self, WireCode, WireCodecError};
use crate::TransactionType;

use std::fmt;

/// Result of classifying a wire code. Unlike [`codec::decode`] this never fails, but an
/// unrecognized code stays distinguishable from every known type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionKind {
    Known(TransactionType),
    Unknown(UnknownCode),
}

/// A wire code that no declared transaction type uses. Only [`TransactionKind::classify`]
/// builds one, so a known code can never travel as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownCode(WireCode);

impl UnknownCode {
    pub fn code(&self) -> WireCode {
        return self.0;
    }
}

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl TransactionKind {
    pub fn classify(code: WireCode) -> Self {
        match codec::decode(code) {
            Ok(tx_type) => Self::Known(tx_type),
            Err(_) => {
                log::debug!("No transaction type for wire code {code}");
                Self::Unknown(UnknownCode(code))
            }
        }
    }

    pub fn known(&self) -> Option<TransactionType> {
        match self {
            Self::Known(tx_type) => Some(*tx_type),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        return self.known().is_some();
    }

    pub fn code(&self) -> WireCode {
        match self {
            Self::Known(tx_type) => codec::encode(*tx_type),
            Self::Unknown(unknown) => unknown.code(),
        }
    }

    /// Turns `Unknown` back into the strict decoding error
    pub fn into_result(self) -> Result<TransactionType, WireCodecError> {
        match self {
            Self::Known(tx_type) => Ok(tx_type),
            Self::Unknown(unknown) => {
                Err(WireCodecError::UnrecognizedTransactionKind(unknown.code()))
            }
        }
    }
}

impl From<TransactionType> for TransactionKind {
    fn from(tx_type: TransactionType) -> Self {
        return Self::Known(tx_type);
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Known(tx_type) => write!(f, "{tx_type}"),
            Self::Unknown(code) => write!(f, "Unknown({code})"),
        }
    }
}
