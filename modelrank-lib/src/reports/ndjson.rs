use crate::Result;
use crate::scoring::ScoreRecord;
use ohno::IntoAppError;
use std::io::Write;

/// Render one record as a single NDJSON line, newline included.
fn render(record: &ScoreRecord) -> Result<String> {
    let mut line = serde_json::to_string(record).into_app_err_with(|| format!("serializing the record for '{}'", record.name()))?;
    line.push('\n');
    Ok(line)
}

/// Write one record as a single NDJSON line.
///
/// The line is rendered in full before anything is written, and written with a single
/// call, so a failing writer never receives half a record from us.
pub fn generate<W: Write>(record: &ScoreRecord, writer: &mut W) -> Result<()> {
    let line = render(record)?;
    writer
        .write_all(line.as_bytes())
        .into_app_err_with(|| format!("writing the record for '{}'", record.name()))?;
    writer.flush().into_app_err("flushing output")?;
    Ok(())
}
