//! Event log export
//!
//! Delimiter-separated text (CSV by default) with one header row and one
//! row per event. Absent optional fields are written as empty cells.
//! JSON export covers the whole run result.

use std::io;

use vigil_core::EventLog;

use crate::error::ExportError;
use crate::simulation::RunResult;

/// Column header of the exported event log
pub const EVENT_LOG_HEADER: [&str; 9] = [
    "t", "actor", "action", "price", "size", "note", "best_bid", "best_ask", "mid",
];

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Write the event log to `writer`
pub fn write_event_log<W: io::Write>(
    events: &EventLog,
    writer: W,
    delimiter: u8,
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    // Header is written explicitly so an empty log still gets one
    wtr.write_record(EVENT_LOG_HEADER)?;
    for event in events {
        wtr.serialize(event)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the event log as a string
pub fn event_log_to_string(events: &EventLog, delimiter: u8) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_event_log(events, &mut buf, delimiter)?;
    Ok(String::from_utf8(buf)?)
}

/// Render the whole run (parameters, log, book, flags) as pretty JSON
pub fn run_result_to_json(result: &RunResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}
