use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "command, id, name, class, amount";

/// Writes a command script with the standard header followed by `rows`.
pub fn script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
