//! Text blocks written by the output sink.

use chrono::NaiveDateTime;

/// Written to the output file in place of a record that could not be retrieved
pub const SKIP_NOTICE: &str = "An error has occurred. Skipping this request";

/// Header written once at the top of a new or empty output file
pub fn format_header(at: &NaiveDateTime, request_count: usize) -> String {
    format!(
        "Timestamp: {}\nNumber of requests: {request_count}\n\n",
        at.format("%d/%m/%Y %H:%M")
    )
}

/// Rendered item followed by a blank line
pub fn format_block(body: &str) -> String {
    format!("{}\n\n", body.trim_end_matches('\n'))
}
