use anyhow::Context;
use clap::Parser;
use fs_err as fs;
use serde_json::json;
use std::io::Read;
use std::path::Path;

use vibe_brief::cli::Args;
use vibe_brief::config::Config;
use vibe_brief::merge::Hints;
use vibe_brief::service::{BatchSummary, Service};
use vibe_brief::wire::{ImproveRequest, RunStamp};
use vibe_brief::{log, safety, ux};

fn read_idea(args: &Args) -> anyhow::Result<String> {
    if let Some(idea) = &args.idea {
        return Ok(idea.clone());
    }
    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading idea from stdin")?;
    Ok(buf)
}

/// `--hints` is either an inline JSON object or a path to one.
fn read_hints(raw: &str) -> anyhow::Result<Hints> {
    let text = if raw.trim_start().starts_with('{') {
        raw.to_string()
    } else {
        fs::read_to_string(raw)?
    };
    let value: serde_json::Value = serde_json::from_str(&text).context("parsing --hints")?;
    Ok(safety::parse_hints(value)?)
}

fn flag_hints(args: &Args) -> anyhow::Result<Hints> {
    let file = match &args.hints {
        Some(raw) => read_hints(raw)?,
        None => Hints::default(),
    };
    let flags = Hints {
        site_type: args.site_type.map(|s| s.as_str().to_string()),
        currency: args.currency.clone(),
        project_mode: args.project.then_some(true),
        features: args.features.clone(),
        ..Hints::default()
    };
    Ok(file.overlay(&flags))
}

fn save(cfg: &Config, args: &Args, req: &impl serde::Serialize, resp: &impl serde::Serialize) -> anyhow::Result<()> {
    let run = RunStamp::now();
    let saved = log::save_run(Path::new(&cfg.artifacts_dir), &run, req, resp)
        .with_context(|| format!("saving run {}", run.id))?;
    if args.debug {
        log::print_saved_paths(&saved);
    }
    Ok(())
}

fn run_single(service: &Service, args: &Args) -> anyhow::Result<()> {
    let hints = flag_hints(args)?;
    let req = ImproveRequest {
        idea: read_idea(args)?,
        hints: (!hints.is_empty()).then_some(hints),
        output_lang: args.lang.map(|l| l.as_str().to_string()),
        include_details: args.details.then_some(true),
        ..ImproveRequest::default()
    };

    let resp = service.handle(&req)?;
    if args.save {
        save(service.config(), args, &req, &resp)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resp)?);
    } else {
        ux::print_response(&resp);
    }
    Ok(())
}

fn run_batch(service: &Service, args: &Args, path: &str) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)?;
    let mut reqs = Vec::new();
    for (n, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut req: ImproveRequest = serde_json::from_str(line)
            .with_context(|| format!("{path}:{}: invalid request", n + 1))?;
        if args.details && req.include_details.is_none() {
            req.include_details = Some(true);
        }
        if req.output_lang.is_none() {
            req.output_lang = args.lang.map(|l| l.as_str().to_string());
        }
        reqs.push(req);
    }

    let pb = ux::batch_progress(reqs.len() as u64);
    let results = service.handle_batch(&reqs, || pb.inc(1));
    pb.finish_and_clear();

    let lines: Vec<serde_json::Value> = results
        .iter()
        .map(|r| match r {
            Ok(resp) => json!({ "ok": resp }),
            Err(e) => json!({ "error": e.to_string() }),
        })
        .collect();

    if args.save {
        save(service.config(), args, &reqs, &lines)?;
    }

    if args.json {
        for line in &lines {
            println!("{}", serde_json::to_string(line)?);
        }
    } else {
        for (i, r) in results.iter().enumerate() {
            if let Err(e) = r {
                eprintln!("request {}: {}", i + 1, e);
            }
        }
        ux::print_batch_dashboard(&BatchSummary::from_results(&results));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => Config::load(Path::new(path)).with_context(|| format!("loading config {path}"))?,
        None => Config::default(),
    };
    log::init_tracing(if args.debug { "debug" } else { &cfg.log_filter });

    let service = Service::new(cfg);
    match &args.batch {
        Some(path) => run_batch(&service, &args, path),
        None => run_single(&service, &args),
    }
}
