//! Scan command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_scan(input: &str) -> Result<(), AppError> {
    let directives = crate::app::api::scan_file(Path::new(input))?;

    if directives.is_empty() {
        eprintln!("ℹ️ No directives found");
        return Ok(());
    }

    for directive in directives {
        println!("{}\t{}\t{}", directive.kind.as_str(), directive.start, directive.payload);
    }
    Ok(())
}
