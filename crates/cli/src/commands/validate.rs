use crate::di::UseCases;
use crate::report::{print_reports, WhitelistReport};
use clap::Args;
use naxsi_wl_domain::StoredWhitelist;

/// Stored fields of a whitelist, checked without tokenizing
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Id spec, e.g. `wl:1000,-1001`
    #[arg(long)]
    pub wid: String,

    /// Match-zone, without the `mz:` prefix
    #[arg(long, default_value = "")]
    pub mz: String,

    #[arg(long)]
    pub negative: bool,

    #[arg(long)]
    pub active: bool,

    /// Name of the whitelist set the entry belongs to
    #[arg(long, default_value = "")]
    pub whitelist_set: String,
}

pub fn validate(use_cases: &UseCases, args: ValidateArgs) -> anyhow::Result<bool> {
    let stored = StoredWhitelist {
        wid: args.wid,
        mz: args.mz,
        negative: args.negative,
        active: args.active,
        timestamp: 0,
        whitelist_set: args.whitelist_set,
    };

    let entry = use_cases.validate.execute(stored);
    let explanation = use_cases.explain.execute(&entry).ok();
    let report = WhitelistReport::new(entry.to_string(), &entry).with_explanation(explanation);

    print_reports(&[report], use_cases.format)
}
