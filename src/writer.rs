use xtk::{KindReport, Result};

use csv::Writer;

/// Serializes the report as csv with a `transaction_type,code,count` header
pub fn write_report(report: &[KindReport]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for kind_report in report {
        log::debug!("Serializing report: {kind_report:?}");
        wtr.serialize(kind_report)?;
    }

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;

    return Ok(string);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_report_rows() {
        let report = vec![
            KindReport {
                transaction_type: "Payment".to_string(),
                code: 0,
                count: 4,
            },
            KindReport {
                transaction_type: "Unknown".to_string(),
                code: 9,
                count: 1,
            },
        ];

        assert_eq!(
            write_report(&report).unwrap(),
            "transaction_type,code,count\nPayment,0,4\nUnknown,9,1\n"
        );
    }

    #[test]
    fn write_empty_report() {
        assert_eq!(write_report(&[]).unwrap(), "");
    }
}
