use std::error::Error;
use std::fs;
use std::path::Path;

/// Whole puzzle file as text, `\r\n` line endings are handled by the parser.
pub(crate) fn read_puzzle_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(path)?)
}
