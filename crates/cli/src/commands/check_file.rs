use super::explain::explain_one;
use crate::di::UseCases;
use crate::report::{print_reports, WhitelistReport};
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Check a file holding one whitelist per line; blank lines and `#`
/// comments are skipped.
pub fn check_file(use_cases: &UseCases, path: &Path) -> anyhow::Result<bool> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read whitelist file {}", path.display()))?;

    let reports: Vec<WhitelistReport> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| explain_one(use_cases, line.trim()).at_line(idx + 1))
        .collect();

    info!(
        path = %path.display(),
        whitelists = reports.len(),
        invalid = reports.iter().filter(|r| !r.valid).count(),
        "Whitelist file checked"
    );

    print_reports(&reports, use_cases.format)
}
