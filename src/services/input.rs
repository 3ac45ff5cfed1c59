use crate::domain::models::Record;
use std::io::Read;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed record array: {0}")]
    MalformedArray(#[source] serde_json::Error),
}

pub fn read_records(mut reader: impl Read) -> Result<Vec<Record>, InputError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_records(&raw)
}

/// Accepts either a JSON array of records or one JSON record per line.
/// Blank lines are skipped in the line-oriented form; a leading BOM is ignored.
pub fn parse_records(raw: &str) -> Result<Vec<Record>, InputError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    if raw.trim_start().starts_with('[') {
        let records: Vec<Record> =
            serde_json::from_str(raw).map_err(InputError::MalformedArray)?;
        debug!(count = records.len(), format = "array", "decoded records");
        return Ok(records);
    }

    let mut out = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let l = line.trim();
        if l.is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(l).map_err(|source| InputError::Malformed {
            line: idx + 1,
            source,
        })?;
        out.push(record);
    }
    debug!(count = out.len(), format = "lines", "decoded records");
    Ok(out)
}
