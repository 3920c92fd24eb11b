use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::record::Record;

const INDENT: &[u8] = b"    ";

/// Render records as an indented JSON array. Non-ASCII stays unescaped.
pub fn render_records(records: &[Record]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut ser)?;
    Ok(buf)
}

pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let bytes = render_records(records)?;
    fs::write(path, bytes)?;
    Ok(())
}
