use crate::codec::WireCodecError;
use crate::{TransactionKind, TransactionType};

/// Per-type logic selected by [`dispatch`]. One method per transaction type, so adding a type
/// breaks every implementor until it is handled.
pub trait TransactionHandler {
    type Output;

    fn payment(&mut self) -> Self::Output;
}

pub fn dispatch<H: TransactionHandler>(tx_type: TransactionType, handler: &mut H) -> H::Output {
    log::debug!("Dispatching transaction type: {tx_type}");

    match tx_type {
        TransactionType::Payment => handler.payment(),
    }
}

/// Dispatches a classified kind, refusing to pick a handler for an unrecognized one
pub fn dispatch_kind<H: TransactionHandler>(
    kind: TransactionKind,
    handler: &mut H,
) -> Result<H::Output, WireCodecError> {
    let tx_type = kind.into_result()?;

    return Ok(dispatch(tx_type, handler));
}
