pub mod codec;
pub mod dispatch;
pub mod input;
mod kind;
mod kind_report;
mod result;
mod tally;
mod transaction_type;

pub use kind::{TransactionKind, UnknownCode};
pub use kind_report::KindReport;
pub use result::Result;
pub use tally::KindTally;
pub use transaction_type::TransactionType;
