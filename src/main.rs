mod args;
mod config;
mod reader;
mod writer;

use xtk::{KindTally, Result};

use std::path::Path;

fn main() -> Result {
    let config = config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut tally = KindTally::new();

    process_data(&config.input_path, &mut tally)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&tally)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file, classify each transaction, and count the kinds
fn process_data(input_path: &Path, tally: &mut KindTally) -> Result {
    log::debug!("Deserializing records...");
    for record in reader::read_records_from_path(input_path)? {
        log::debug!("Parsing record into InputRecord: {record:?}");
        let input_record = match record {
            Ok(input_record) => input_record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let kind = match input_record.parse_kind() {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("Skipping tx {}: {e}", input_record.tx);
                continue;
            }
        };

        if !kind.is_known() {
            log::warn!("Unrecognized transaction kind for tx {}: {kind}", input_record.tx);
        }

        let count = tally.record(kind);
        log::debug!("Recorded {kind} for tx {}, count now {count}", input_record.tx);
    }

    Ok(())
}

/// Build report from the tally, and write report to stdout
fn report_to_std_out(tally: &KindTally) -> Result {
    let report = tally.build_report();
    log::debug!("Built report for {} kinds over {} transactions", report.len(), tally.total());

    let output = writer::write_report(&report)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
