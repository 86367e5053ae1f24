use crate::codec::{self, WireCode};
use crate::Result;
use crate::TransactionKind;

use serde::Deserialize;

use thiserror::Error;

/// Represents an input row that a csv record would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    pub tx: String,

    /// Either a numeric wire code or a canonical type name
    #[serde(rename = "type")]
    pub typ: String,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input record: transaction type missing: {0:?}")]
    MissingType(InputRecord),

    #[error("Error parsing input record: wire code must be plain decimal digits: {0:?}")]
    MalformedCode(InputRecord),

    #[error("Error parsing input record: wire code does not fit in 16 bits: {0:?}")]
    CodeOutOfRange(InputRecord),
}

impl InputRecord {
    /// Numeric codes always classify, unknown ones as `Unknown`. Names must be recognized.
    pub fn parse_kind(&self) -> Result<TransactionKind> {
        let typ = self.typ.as_str();

        if typ.is_empty() {
            Err(InputParseError::MissingType(self.clone()))?
        }

        let digits = typ.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(typ);

        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            // Signs and leading zeros have no place in a canonical code
            if digits.len() != typ.len() || (digits.len() > 1 && digits.starts_with('0')) {
                Err(InputParseError::MalformedCode(self.clone()))?
            }

            let code = digits
                .parse::<u16>()
                .map_err(|_| InputParseError::CodeOutOfRange(self.clone()))?;

            return Ok(TransactionKind::classify(WireCode(code)));
        }

        let tx_type = codec::from_name(typ)?;

        Ok(TransactionKind::Known(tx_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::codec::WireCodecError;
    use crate::TransactionType;

    const SOME_TX: &str = "E08D6E9754025BA2534A78707605E0601F03ACE063687A0CA1BDDACFCD1698C7";

    fn build_record(typ: &str) -> InputRecord {
        InputRecord {
            tx: SOME_TX.to_string(),
            typ: typ.to_string(),
        }
    }

    #[test]
    fn parse_kind_from_code() {
        assert_eq!(
            build_record("0").parse_kind().unwrap(),
            TransactionKind::Known(TransactionType::Payment)
        );
        assert_eq!(
            build_record("12").parse_kind().unwrap(),
            TransactionKind::classify(WireCode(12))
        );
        assert!(!build_record("12").parse_kind().unwrap().is_known());
        assert_eq!(build_record("65535").parse_kind().unwrap().code(), WireCode(u16::MAX));
    }

    #[test]
    fn parse_kind_from_name() {
        assert_eq!(
            build_record("Payment").parse_kind().unwrap(),
            TransactionKind::Known(TransactionType::Payment)
        );

        let err = build_record("OfferCreate").parse_kind().unwrap_err();
        assert_eq!(
            err.downcast_ref::<WireCodecError>(),
            Some(&WireCodecError::UnrecognizedTransactionName("OfferCreate".to_string()))
        );
    }

    fn parse_error(typ: &str) -> InputParseError {
        let err = build_record(typ).parse_kind().unwrap_err();

        match err.downcast::<InputParseError>() {
            Ok(err) => err,
            Err(err) => panic!("expected InputParseError for {typ:?}, got {err}"),
        }
    }

    #[test]
    fn parse_kind_rejects_missing_type() {
        assert!(matches!(parse_error(""), InputParseError::MissingType(_)));
    }

    #[test]
    fn parse_kind_rejects_non_canonical_codes() {
        for typ in ["+0", "-0", "-1", "00", "007"] {
            assert!(
                matches!(parse_error(typ), InputParseError::MalformedCode(_)),
                "{typ:?} should be a malformed code"
            );
        }

        // A bare sign is neither a code nor a name
        let err = build_record("+").parse_kind().unwrap_err();
        assert!(err.downcast_ref::<WireCodecError>().is_some());
    }

    #[test]
    fn parse_kind_rejects_out_of_range_codes() {
        for typ in ["65536", "70000", "99999999999999999999"] {
            assert!(
                matches!(parse_error(typ), InputParseError::CodeOutOfRange(_)),
                "{typ:?} should be out of range"
            );
        }
    }

    #[test]
    fn deserialize_from_csv() {
        let data = "tx, type\nabc, Payment\ndef, 0\n";
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let records: Vec<InputRecord> = rdr.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tx, "abc");
        assert_eq!(records[0].typ, "Payment");
        assert_eq!(records[1].typ, "0");
    }

    #[derive(Deserialize)]
    struct TypedRow {
        #[serde(rename = "TransactionType")]
        tx_type: TransactionType,
    }

    #[test]
    fn transaction_type_deserializes_from_canonical_name() {
        let data = "TransactionType\nPayment\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());

        let rows: Vec<TypedRow> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows[0].tx_type, TransactionType::Payment);

        let data = "TransactionType\npayment\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        assert!(rdr.deserialize::<TypedRow>().next().unwrap().is_err());
    }
}
