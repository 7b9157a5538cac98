use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON line (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Write a whole document (`history`, `status`) pretty-printed.
pub fn write_document<T: Serialize, W: Write>(out: &mut W, document: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn print_document<T: Serialize>(document: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_document(&mut out, document)
}
