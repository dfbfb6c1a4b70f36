use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::model::FeatureVector;
use crate::service::BatchSummary;
use crate::wire::ImproveResponse;

/// Print a rendered document with headings highlighted.
pub fn print_document(doc: &str) {
    for (i, block) in doc.split("\n\n").enumerate() {
        let mut lines = block.lines();
        if let Some(first) = lines.next() {
            if i == 0 {
                println!("{}", first.bold());
            } else if first.ends_with(':') {
                println!("{}", first.cyan().bold());
            } else {
                println!("{}", first);
            }
        }
        for line in lines {
            println!("{}", line);
        }
        println!();
    }
}

pub fn print_response(resp: &ImproveResponse) {
    println!("\n{}", "=== IMPROVED PROMPT ===".green().bold());
    print_document(&resp.improved_prompt);

    if let Some(bp) = &resp.blueprint {
        println!("{}", "=== PROJECT BLUEPRINT ===".magenta().bold());
        print_document(bp);
    }

    if let Some(fv) = &resp.details {
        print_details(fv);
    }

    let note = if resp.cached { "  (cached)" } else { "" };
    println!("{}", format!("processed in {:.2}ms{}", resp.processing_ms, note).dimmed());
}

pub fn print_details(fv: &FeatureVector) {
    println!("{}", "=== DETAILS ===".yellow().bold());
    let row = |k: &str, v: String| println!("  {:<18} {}", k.bold(), v);
    row("site type", fv.site_type.to_string());
    row("project mode", fv.project_mode.to_string());
    row("output lang", fv.output_lang.to_string());
    row("audience", fv.audience.join(", "));
    row("tone", fv.tone.join(", "));
    row("features", fv.selected_features.join(", "));
    row("industries", fv.industries.join(", "));
    row("regions", fv.regions.join(", "));
    row("languages", fv.languages.join(", "));
    row("currency", fv.currency.clone());
    row("payments", fv.requires_payments.to_string());
    if !fv.compliance.is_empty() {
        row("compliance", fv.compliance.join(", "));
    }
    row("pages", fv.pages.join(", "));
    println!();
}

pub fn batch_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template("{spinner} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    pb.set_style(style);
    pb.set_message("ideas");
    pb
}

pub fn print_batch_dashboard(sum: &BatchSummary) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━━━━ Batch Results ━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!(
        "  {}: {}   {}: {}   {}: {}   {}: {}   {}: {}   {}: {}   {}: {:.2}ms",
        "Total".bold(), sum.total,
        "Ok".green().bold(), sum.ok,
        "Cached".cyan().bold(), sum.cached,
        "Blueprints".magenta().bold(), sum.blueprints,
        "Rejected".red().bold(), sum.rejected,
        "Limited".yellow().bold(), sum.rate_limited,
        "Mean".bold(), sum.mean_ms
    );
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());
}
