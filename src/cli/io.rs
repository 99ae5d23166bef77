//! Output formatting for the CLI and the shell
//!
//! Text output mirrors the interactive menu. JSON output is one object per
//! command:
//! - success: `{"status":"ok","data":...}`
//! - failure: `{"status":"error","code":...,"message":...}`

use std::io::{BufRead, Write};

use serde_json::Value;

use crate::catalog::{BookRecord, CatalogStats};

use super::errors::CliResult;

const RULE: &str = "----------------------------------------";

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Write one record as a ruled block
pub fn write_record<W: Write>(out: &mut W, record: &BookRecord) -> CliResult<()> {
    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "Title: {}", record.title)?;
    writeln!(out, "Author: {}", record.author)?;
    writeln!(out, "ISBN: {}", record.identifier)?;
    writeln!(out, "Status: {}", record.status_label())?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// Write the statistics block
pub fn write_stats<W: Write>(out: &mut W, stats: &CatalogStats) -> CliResult<()> {
    writeln!(out, "\n=== Library Statistics ===")?;
    writeln!(out, "Total Books: {}", stats.total)?;
    writeln!(out, "Available Books: {}", stats.available)?;
    writeln!(out, "Checked Out Books: {}", stats.checked_out)?;
    writeln!(out, "========================")?;
    Ok(())
}

/// Read one line, without its line terminator.
///
/// Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
