use std::path::{Path, PathBuf};

use seoscan_common::SeoscanError;
use seoscan_web::{SeoChecks, StructuredDataResult, check_seo_basics, extract_structured_data};

/// Findings for one document.
#[derive(Debug)]
pub struct ScanReport {
    pub structured_data: Vec<StructuredDataResult>,
    pub checks: SeoChecks,
}

/// How a single run ended. Every variant renders to a printable report.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(ScanReport),
    MissingInput { path: PathBuf },
    Failed { message: String },
}

impl From<SeoscanError> for RunOutcome {
    fn from(err: SeoscanError) -> Self {
        match err {
            SeoscanError::MissingInput { path } => Self::MissingInput { path },
            other => Self::Failed {
                message: other.to_string(),
            },
        }
    }
}

/// Read `path` fully as UTF-8; the handle is closed before returning.
pub fn read_document(path: &Path) -> seoscan_common::Result<String> {
    std::fs::read_to_string(path).map_err(|e| SeoscanError::from_io(path, e))
}

/// Run both passes over an in-memory document.
pub fn scan_document(html: &str) -> ScanReport {
    let structured_data = extract_structured_data(html);
    let checks = check_seo_basics(html);

    if let Ok(flat) = serde_json::to_string(&checks) {
        tracing::debug!(checks = %flat, "basic checks");
    }

    ScanReport {
        structured_data,
        checks,
    }
}

/// Scan the document at `path`, folding every failure into the outcome.
pub fn scan_path(path: &Path) -> RunOutcome {
    tracing::info!(path = %path.display(), "scanning build output");

    match read_document(path) {
        Ok(html) => RunOutcome::Completed(scan_document(&html)),
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "could not read input");
            err.into()
        }
    }
}
