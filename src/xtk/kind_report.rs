use serde::{Deserialize, Serialize};

/// One row of the output report
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct KindReport {
    pub transaction_type: String,
    pub code: u16,
    pub count: usize,
}
