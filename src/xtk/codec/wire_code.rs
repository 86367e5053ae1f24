use std::fmt;

/// Value of the 16-bit `TransactionType` field as it appears in a serialized transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireCode(pub u16);

impl fmt::Display for WireCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

