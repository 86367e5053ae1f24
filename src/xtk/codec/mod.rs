mod wire_code;

pub use wire_code::WireCode;

use crate::TransactionType;

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireCodecError {
    #[error("Unrecognized transaction kind for wire code: {0}")]
    UnrecognizedTransactionKind(WireCode),

    #[error("Unrecognized transaction kind for name: {0:?}")]
    UnrecognizedTransactionName(String),
}

// Two types sharing a code or a name would make decoding ambiguous
const _: () = {
    let all = TransactionType::ALL;
    let mut i = 0;
    while i < all.len() {
        let mut j = i + 1;
        while j < all.len() {
            assert!(all[i].wire_code().0 != all[j].wire_code().0, "duplicate wire code");
            assert!(
                !const_str_eq(all[i].canonical_name(), all[j].canonical_name()),
                "duplicate transaction type name"
            );
            j += 1;
        }
        i += 1;
    }
};

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

pub fn encode(tx_type: TransactionType) -> WireCode {
    return tx_type.wire_code();
}

pub fn name(tx_type: TransactionType) -> &'static str {
    return tx_type.canonical_name();
}

/// Maps a wire code to its transaction type. Unknown codes are an error, never a default.
pub fn decode(code: WireCode) -> Result<TransactionType, WireCodecError> {
    let tx_type = TransactionType::ALL
        .into_iter()
        .find(|typ| encode(*typ) == code)
        .ok_or(WireCodecError::UnrecognizedTransactionKind(code))?;

    return Ok(tx_type);
}

/// Maps a canonical name (case-sensitive) to its transaction type
pub fn from_name(name: &str) -> Result<TransactionType, WireCodecError> {
    let tx_type = TransactionType::ALL
        .into_iter()
        .find(|typ| self::name(*typ) == name)
        .ok_or_else(|| WireCodecError::UnrecognizedTransactionName(name.to_string()))?;

    return Ok(tx_type);
}

impl From<TransactionType> for WireCode {
    fn from(tx_type: TransactionType) -> Self {
        return encode(tx_type);
    }
}

impl TryFrom<WireCode> for TransactionType {
    type Error = WireCodecError;

    fn try_from(code: WireCode) -> Result<Self, Self::Error> {
        return decode(code);
    }
}

impl FromStr for TransactionType {
    type Err = WireCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return from_name(s);
    }
}
