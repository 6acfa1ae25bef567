//! Scrub transform — strip embedded hidden-test regions from HTML feedback
//! reports before they reach student repositories.
//!
//! Graded reports can embed the instructor's hidden test cells between
//! `<!-- BEGIN HIDDEN TESTS -->` / `<!-- END HIDDEN TESTS -->` comment
//! markers. Scrubbing removes each marked region, markers included, and
//! rewrites the file in place. Only files with the exact extension `html`
//! (case-sensitive) are touched; everything else is left byte-identical.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::copy;
use crate::error::{io_err, DistributeError};

/// File extension marking a report as scrubbable.
pub const SCRUB_EXTENSION: &str = "html";

/// Counts from one [`scrub_reports`] pass, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrubStats {
    /// Every file seen under the source tree.
    pub files_seen: usize,
    /// Files with the scrubbable extension that were rewritten.
    pub files_scrubbed: usize,
}

fn hidden_test_region() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<!--\s*BEGIN HIDDEN TESTS\s*-->.*?<!--\s*END HIDDEN TESTS\s*-->")
            .expect("hidden-test marker pattern is valid")
    })
}

/// Rewrite one report in place, dropping every marked hidden-test region.
///
/// A report with no markers is rewritten to identical content only in
/// memory; the file itself is untouched.
pub fn scrub_report(path: &Path) -> Result<(), DistributeError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let scrubbed = hidden_test_region().replace_all(&contents, "");
    if scrubbed != contents {
        std::fs::write(path, scrubbed.as_bytes()).map_err(|e| io_err(path, e))?;
        debug!("scrubbed hidden tests from {}", path.display());
    }
    Ok(())
}

/// Walk `source_dir` and scrub every `.html` file, returning counts.
///
/// The counts are part of the contract (not just console noise): callers and
/// tests rely on `(files_seen, files_scrubbed)` to know what happened.
pub fn scrub_reports(source_dir: &Path) -> Result<ScrubStats, DistributeError> {
    let mut files = Vec::new();
    copy::walk(source_dir, &mut |path| files.push(path.clone()));

    let mut scrubbed = 0;
    for file in &files {
        if file.extension().and_then(|e| e.to_str()) == Some(SCRUB_EXTENSION) {
            scrub_report(file)?;
            scrubbed += 1;
        }
    }
    info!(
        "found {} files in {}; scrubbed {} html files",
        files.len(),
        source_dir.display(),
        scrubbed
    );
    Ok(ScrubStats {
        files_seen: files.len(),
        files_scrubbed: scrubbed,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
