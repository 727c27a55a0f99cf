use naxsi_wl_domain::{OutputFormat, WhitelistEntry};
use serde::Serialize;
use std::io::{self, Write};

/// Outcome of one whitelist, as shown to the user.
#[derive(Debug, Serialize)]
pub struct WhitelistReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub text: String,
    pub canonical: Option<String>,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl WhitelistReport {
    pub fn new(text: impl Into<String>, entry: &WhitelistEntry) -> Self {
        let valid = entry.is_valid();
        Self {
            line: None,
            text: text.into(),
            canonical: valid.then(|| entry.to_string()),
            valid,
            errors: entry.error_messages(),
            warnings: entry.warning_messages(),
            explanation: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_explanation(mut self, explanation: Option<String>) -> Self {
        self.explanation = explanation;
        self
    }

    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        match self.line {
            Some(line) => writeln!(out, "{line}: {}", self.text)?,
            None => writeln!(out, "{}", self.text)?,
        }

        match &self.canonical {
            Some(canonical) => writeln!(out, "  ok       {canonical}")?,
            None => writeln!(out, "  invalid")?,
        }
        for error in &self.errors {
            writeln!(out, "  error    {error}")?;
        }
        for warning in &self.warnings {
            writeln!(out, "  warning  {warning}")?;
        }
        if let Some(explanation) = &self.explanation {
            writeln!(out, "  {explanation}")?;
        }
        Ok(())
    }
}

/// Print every report on stdout; returns whether all of them were valid.
pub fn print_reports(reports: &[WhitelistReport], format: OutputFormat) -> anyhow::Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, reports)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for report in reports {
                report.write_text(&mut out)?;
            }
            if reports.len() > 1 {
                let invalid = reports.iter().filter(|r| !r.valid).count();
                writeln!(out, "{} whitelists checked, {} invalid", reports.len(), invalid)?;
            }
        }
    }

    Ok(reports.iter().all(|r| r.valid))
}
