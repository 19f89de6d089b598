//! `railpal parse` — run the normalizer on raw text, no OCR involved.
//!
//! Exists so extraction can be exercised and debugged against any text
//! source (tesseract output, a saved scan, hand-typed fixtures).

use std::io::Read;
use std::path::PathBuf;

use railpal_extract::{parse_inventory, parse_work_orders};

use crate::{CliError, ParseKind};

pub(crate) fn cmd_parse(kind: ParseKind, file: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let text = read_input(&file)?;

    match kind {
        ParseKind::WorkOrders => {
            let records = parse_work_orders(&text);
            if json {
                print_json(&records)?;
            } else {
                for record in &records {
                    println!("{}\t{}", record.car, record.spot);
                }
            }
        }
        ParseKind::Inventory => {
            let records = parse_inventory(&text);
            if json {
                print_json(&records)?;
            } else {
                for record in &records {
                    println!("{}\t{}", record.car, record.raw);
                }
            }
        }
    }

    Ok(())
}

fn read_input(file: &Option<PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::args(format!("cannot read {}: {}", path.display(), e))),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::args(format!("cannot read stdin: {}", e)))?;
            Ok(text)
        }
    }
}

fn print_json<T: serde::Serialize>(records: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(records).map_err(|e| CliError {
        code: crate::exit_codes::EXIT_ERROR,
        message: format!("cannot serialize records: {}", e),
        hint: None,
    })?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        std::fs::write(&path, "ABCD1234 12-34\n").unwrap();

        cmd_parse(ParseKind::WorkOrders, Some(path), false).unwrap();
    }

    #[test]
    fn parse_missing_file_is_usage_error() {
        let err = cmd_parse(
            ParseKind::Inventory,
            Some(PathBuf::from("/nonexistent/sheet.txt")),
            false,
        )
        .unwrap_err();
        assert_eq!(err.code, crate::exit_codes::EXIT_USAGE);
    }
}
