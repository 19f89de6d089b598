//! `railpal reconcile` — the full session flow.
//!
//! One invocation is one reconciliation session. The two upload channels run
//! on parallel threads; each holds its channel permit for the duration of a
//! recognition call. Parsed records only enter the store after every
//! recognition on that channel succeeded, so a failed scan leaves the store
//! untouched.

use std::path::PathBuf;

use railpal_backend_client::BackendClient;
use railpal_config::Settings;
use railpal_extract::{parse_inventory, parse_work_orders};
use railpal_io::{export_to_path, DEFAULT_EXPORT_FILENAME, RESULT_HEADER};
use railpal_recon::{build_report, compute_summary, ReconciliationSession, UploadChannel};

use crate::exit_codes;
use crate::{resolve_api_base, CliError};

/// Where upload text comes from: raw text files, or OCR via the backend.
#[derive(Clone, Copy)]
enum TextSource<'a> {
    RawFiles,
    Backend(&'a BackendClient),
}

pub(crate) fn cmd_reconcile(
    work_orders: Vec<PathBuf>,
    inventory: Vec<PathBuf>,
    raw: bool,
    output: Option<PathBuf>,
    json: bool,
    api_base: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = Settings::load();

    let client = if raw {
        None
    } else {
        let base = resolve_api_base(api_base, &settings);
        Some(BackendClient::with_base_url(base).map_err(|e| CliError {
            code: exit_codes::EXIT_ERROR,
            message: format!("cannot build HTTP client: {}", e),
            hint: None,
        })?)
    };

    let mut session = ReconciliationSession::new();

    let source = match &client {
        Some(client) => TextSource::Backend(client),
        None => TextSource::RawFiles,
    };

    // Both channels in flight at once; each file on a channel is sequential.
    let (wo_join, inv_join) = std::thread::scope(|s| {
        let session = &session;
        let wo = s.spawn(move || {
            gather_texts(session, UploadChannel::WorkOrders, &work_orders, source, quiet)
        });
        let inv = s.spawn(move || {
            gather_texts(session, UploadChannel::Inventory, &inventory, source, quiet)
        });
        (wo.join(), inv.join())
    });

    let wo_texts = wo_join.map_err(|_| upload_panic(UploadChannel::WorkOrders))??;
    let inv_texts = inv_join.map_err(|_| upload_panic(UploadChannel::Inventory))??;

    // Work-order sheets accumulate via upsert, in argument order.
    for text in &wo_texts {
        let records = parse_work_orders(text);
        let outcome = session.store_mut().upsert_work_orders(records);
        if !quiet {
            eprintln!(
                "work-order: {} new, {} updated",
                outcome.inserted, outcome.updated,
            );
        }
    }

    // Inventory sheets form a single snapshot replacing the previous one.
    let mut snapshot = Vec::new();
    for text in &inv_texts {
        snapshot.extend(parse_inventory(text));
    }
    if !quiet {
        eprintln!("inventory: {} cars on track", snapshot.len());
    }
    session.store_mut().replace_inventory(snapshot);

    let results = session.reconcile();
    let summary = compute_summary(&results);

    let out_path = output.unwrap_or_else(|| {
        if settings.default_export.is_empty() {
            PathBuf::from(DEFAULT_EXPORT_FILENAME)
        } else {
            PathBuf::from(&settings.default_export)
        }
    });
    export_to_path(&out_path, &RESULT_HEADER, &results)
        .map_err(|e| CliError::export_io(format!("cannot write {}: {}", out_path.display(), e)))?;

    if !quiet {
        eprintln!(
            "matched {} of {} cars ({} unmatched) -> {}",
            summary.matched,
            summary.total,
            summary.unmatched,
            out_path.display(),
        );
    }

    if json {
        let report = build_report(results);
        let text = serde_json::to_string_pretty(&report).map_err(|e| CliError {
            code: exit_codes::EXIT_ERROR,
            message: format!("cannot serialize report: {}", e),
            hint: None,
        })?;
        println!("{}", text);
    }

    Ok(())
}

/// Recognize (or read) every file on one channel, preserving argument order.
fn gather_texts(
    session: &ReconciliationSession,
    channel: UploadChannel,
    files: &[PathBuf],
    source: TextSource<'_>,
    quiet: bool,
) -> Result<Vec<String>, CliError> {
    let mut texts = Vec::with_capacity(files.len());

    for path in files {
        let text = match &source {
            TextSource::RawFiles => {
                if !quiet {
                    eprintln!("{}: reading {}", channel, path.display());
                }
                std::fs::read_to_string(path).map_err(|e| {
                    CliError::args(format!("cannot read {}: {}", path.display(), e))
                })?
            }
            TextSource::Backend(client) => {
                if !quiet {
                    eprintln!("{}: recognizing {}", channel, path.display());
                }
                let _permit = session.begin_upload(channel).map_err(|e| CliError {
                    code: exit_codes::EXIT_SCAN_BUSY,
                    message: e.to_string(),
                    hint: None,
                })?;
                client.recognize_file(path).map_err(|e| {
                    CliError {
                        code: exit_codes::EXIT_SCAN_RECOGNITION,
                        message: format!("recognition failed for {}: {}", path.display(), e),
                        hint: None,
                    }
                    .with_hint("pass --raw if the file is already plain text")
                })?
            }
        };
        texts.push(text);
    }

    Ok(texts)
}

fn upload_panic(channel: UploadChannel) -> CliError {
    CliError {
        code: exit_codes::EXIT_ERROR,
        message: format!("{} upload thread panicked", channel),
        hint: None,
    }
}
