// CSV export of match results

use std::io::Write;
use std::path::Path;

use railpal_core::MatchResult;

/// Default name of the downloadable export artifact.
pub const DEFAULT_EXPORT_FILENAME: &str = "railpal_results.csv";

/// Column headers of the results table, in field order.
pub const RESULT_HEADER: [&str; 3] = ["Car Number", "Spot", "Matched"];

/// Render match results as quoted, comma-delimited text.
///
/// Format contract: first line is the header, then one line per result with
/// fields `car, spot, Yes|No`. Every field is double-quoted and rows end
/// with `\n`. Embedded newlines inside a field become a single space before
/// quoting. Embedded double quotes are escaped by doubling (RFC 4180) — the
/// quoting of fields without embedded quotes is unaffected.
pub fn to_delimited_text(header: &[&str], rows: &[MatchResult]) -> Result<String, String> {
    // Flexible: the header is caller-supplied and need not be three fields.
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    writer
        .write_record(header.iter().map(|f| sanitize_field(f)))
        .map_err(|e| e.to_string())?;

    for row in rows {
        let matched = if row.matched { "Yes" } else { "No" };
        writer
            .write_record([
                sanitize_field(&row.car),
                sanitize_field(&row.spot),
                matched.to_string(),
            ])
            .map_err(|e| e.to_string())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Replace each embedded newline with a single space.
fn sanitize_field(field: &str) -> String {
    field.replace('\n', " ")
}

/// Write the export artifact to a file.
pub fn export_to_path(path: &Path, header: &[&str], rows: &[MatchResult]) -> Result<(), String> {
    let text = to_delimited_text(header, rows)?;
    let file = std::fs::File::create(path)
        .map_err(|e| format!("cannot create {}: {}", path.display(), e))?;
    let mut writer = std::io::BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| format!("cannot write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn result(car: &str, spot: &str, matched: bool) -> MatchResult {
        MatchResult {
            car: car.into(),
            spot: spot.into(),
            matched,
        }
    }

    #[test]
    fn header_and_rows_fully_quoted() {
        let rows = vec![result("A1234", "1-1", true), result("B5678", "", false)];
        let text = to_delimited_text(&RESULT_HEADER, &rows).unwrap();
        assert_eq!(
            text,
            "\"Car Number\",\"Spot\",\"Matched\"\n\"A1234\",\"1-1\",\"Yes\"\n\"B5678\",\"\",\"No\"\n"
        );
    }

    #[test]
    fn no_rows_still_emits_header() {
        let text = to_delimited_text(&RESULT_HEADER, &[]).unwrap();
        assert_eq!(text, "\"Car Number\",\"Spot\",\"Matched\"\n");
    }

    #[test]
    fn embedded_newlines_become_spaces() {
        let rows = vec![result("A1234\nB5678", "", false)];
        let text = to_delimited_text(&["Car"], &rows).unwrap();
        assert!(text.contains("\"A1234 B5678\""));
        // Only row terminators remain as newlines.
        assert_eq!(text.matches('\n').count(), 2);
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let rows = vec![result("A1234 \"shopworn\"", "", false)];
        let text = to_delimited_text(&["Car"], &rows).unwrap();
        assert!(text.contains("\"A1234 \"\"shopworn\"\"\""));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);

        let rows = vec![result("A1234", "1-1", true)];
        export_to_path(&path, &RESULT_HEADER, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("\"Car Number\""));
        assert!(content.ends_with("\"A1234\",\"1-1\",\"Yes\"\n"));
    }

    #[test]
    fn export_to_bad_path_is_an_error() {
        let err = export_to_path(
            Path::new("/nonexistent-dir/out.csv"),
            &RESULT_HEADER,
            &[],
        )
        .unwrap_err();
        assert!(err.contains("cannot create"));
    }
}
