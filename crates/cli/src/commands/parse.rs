use crate::di::UseCases;
use crate::report::{print_reports, WhitelistReport};

pub fn parse(use_cases: &UseCases, texts: &[String]) -> anyhow::Result<bool> {
    let reports: Vec<WhitelistReport> = texts
        .iter()
        .map(|text| WhitelistReport::new(text.as_str(), &use_cases.parse.execute(text)))
        .collect();

    print_reports(&reports, use_cases.format)
}
