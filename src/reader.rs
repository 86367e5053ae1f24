use xtk::input::InputRecord;
use xtk::Result;

use std::{fs::File, io::Read, path::Path};

use csv::{DeserializeRecordsIntoIter, ReaderBuilder, Trim};

/// Streams `tx,type` rows from any csv source, tolerating padding and ragged rows
pub fn read_records<R: Read>(source: R) -> DeserializeRecordsIntoIter<R, InputRecord> {
    return ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source)
        .into_deserialize();
}

pub fn read_records_from_path(filepath: &Path) -> Result<DeserializeRecordsIntoIter<File, InputRecord>> {
    let file = File::open(filepath)?;

    return Ok(read_records(file));
}
