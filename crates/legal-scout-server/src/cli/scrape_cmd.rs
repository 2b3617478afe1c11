//! `legal-scout scrape <url>`: scan one site and print its report.

use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use legal_scout::{Category, ScanStatus, Scanner, ScoutConfig, ScrapeReport, Strategy};
use std::time::Instant;

/// Run the scrape command.
pub async fn run(url: &str, strategy: Option<Strategy>, json_only: bool) -> Result<()> {
    let config = ScoutConfig::from_env_with_strategy(strategy).context("loading configuration")?;

    let scanner = Scanner::from_config(config).context("building scanner")?;
    let start = Instant::now();

    if !json_only {
        let s = Styled::new();
        output::print_header(&s);
        eprintln!("  Scanning {url} ({} strategy)...", scanner.strategy());
        eprintln!();
    }

    let report = scanner.scan(url).await?;

    if !json_only {
        print_summary(&Styled::new(), &report, start.elapsed());
    }
    output::print_json(&serde_json::to_value(&report)?);
    Ok(())
}

/// Print the per-category table on stderr.
fn print_summary(s: &Styled, report: &ScrapeReport, elapsed: std::time::Duration) {
    let meta = &report.meta;

    if meta.status == ScanStatus::FailedToFetch {
        output::print_check(
            s.fail_sym(),
            "Root page",
            meta.error.as_deref().unwrap_or("could not fetch"),
        );
        eprintln!();
        return;
    }

    output::print_section(s, &meta.url);
    for category in Category::ALL {
        match report.get(category) {
            Some(value) => output::print_check(s.ok_sym(), category.id(), &output::preview(value, 60)),
            None => output::print_check(s.info_sym(), category.id(), &s.dim("not found")),
        }
    }
    eprintln!();
    eprintln!(
        "  {} of {} categories found ({} links, {} candidates) in {:.1}s",
        s.green(&meta.documents_found.to_string()),
        Category::ALL.len(),
        meta.links_found,
        meta.candidates,
        elapsed.as_secs_f64()
    );
    eprintln!();
}
