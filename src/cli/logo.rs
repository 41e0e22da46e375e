//! toucan logo command implementation

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::normalize::{logo_key, logo_path};
use crate::output::{emit_success, HumanOutput};

use super::Context;

#[derive(Serialize)]
struct LogoReport {
    company: String,
    key: Option<String>,
    path: Option<PathBuf>,
}

pub fn run(context: &Context, company: &str) -> Result<()> {
    let logos = &context.config.logos;
    let report = LogoReport {
        company: company.to_string(),
        key: logo_key(company),
        path: logo_path(&logos.dir, company, &logos.extension),
    };

    let mut human = match &report.key {
        Some(key) => HumanOutput::new(format!("toucan logo: {key}")),
        None => HumanOutput::new("toucan logo: no usable characters in company name"),
    };
    if let Some(path) = &report.path {
        human.push_summary("path", path.display().to_string());
    }

    emit_success(context.output, "logo", &report, Some(&human))
}
