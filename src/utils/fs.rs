use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::FigcodeError;

/// Read an input document, or stdin when `path` is `-` or absent
pub fn read_input(path: Option<&Path>) -> Result<String, FigcodeError> {
    let mut contents = String::new();
    match path {
        Some(path) if path != Path::new("-") => {
            let mut file = fs::File::open(path)?;
            file.read_to_string(&mut contents)?;
        }
        _ => {
            io::stdin().read_to_string(&mut contents)?;
        }
    }
    Ok(contents)
}

/// Write rendered output to a file (creating parent directories) or to stdout
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<(), FigcodeError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut file = fs::File::create(path)?;
            file.write_all(contents.as_bytes())?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(contents.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
