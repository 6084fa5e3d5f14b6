pub mod config;
pub mod progress;
pub mod rules;
pub mod status;
pub mod summary;

use std::io::Read;
use std::path::Path;

/// Read a JSON document from `path`, or from stdin when the path is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(p) if p != Path::new("-") => {
            tracing::debug!(path = %p.display(), "reading input file");
            Ok(std::fs::read_to_string(p)?)
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
