use crate::di::UseCases;
use crate::report::{print_reports, WhitelistReport};

pub fn explain(use_cases: &UseCases, texts: &[String]) -> anyhow::Result<bool> {
    let reports: Vec<WhitelistReport> = texts
        .iter()
        .map(|text| explain_one(use_cases, text))
        .collect();

    print_reports(&reports, use_cases.format)
}

pub(crate) fn explain_one(use_cases: &UseCases, text: &str) -> WhitelistReport {
    let entry = use_cases.parse.execute(text);
    // Invalid entries already carry their errors in the report.
    let explanation = use_cases.explain.execute(&entry).ok();

    WhitelistReport::new(text, &entry).with_explanation(explanation)
}
