use anyhow::Context;
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

use crate::wire::{RunRecord, RunStamp};

static INIT: Once = Once::new();

/// Install the stderr subscriber. `RUST_LOG` wins over `default_filter`.
/// Later calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .try_init();
    });
}

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: PathBuf,
    pub response: PathBuf,
}

pub fn run_dir(root: &Path, run: &RunStamp) -> PathBuf {
    root.join(run.id.to_string())
}

/// Write `request.json` and `response.json` under `<root>/<run id>/`.
pub fn save_run<Req: Serialize, Resp: Serialize>(
    root: &Path,
    run: &RunStamp,
    req: &Req,
    resp: &Resp,
) -> anyhow::Result<SavedPaths> {
    let dir = run_dir(root, run);
    fs::create_dir_all(&dir)?;

    let request = dir.join("request.json");
    let record = RunRecord { run: run.clone(), body: req };
    fs::write(&request, to_string_pretty(&record).context("serializing request")?)?;

    let response = dir.join("response.json");
    let record = RunRecord { run: run.clone(), body: resp };
    fs::write(&response, to_string_pretty(&record).context("serializing response")?)?;

    Ok(SavedPaths { dir, request, response })
}

pub fn print_saved_paths(saved: &SavedPaths) {
    eprintln!("debug: artifacts directory: {}", saved.dir.display());
    eprintln!("debug: request saved at: {}", saved.request.display());
    eprintln!("debug: response saved at: {}", saved.response.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn save_run_writes_both_files_stamped() {
        let root = tempfile::tempdir().unwrap();
        let run = RunStamp::now();
        let saved = save_run(root.path(), &run, &json!({ "idea": "x" }), &json!({ "ok": true })).unwrap();

        assert_eq!(saved.dir, root.path().join(run.id.to_string()));
        let req: Value = serde_json::from_str(&fs::read_to_string(&saved.request).unwrap()).unwrap();
        assert_eq!(req["idea"], "x");
        assert_eq!(req["run"]["id"], run.id.to_string());
        let resp: Value = serde_json::from_str(&fs::read_to_string(&saved.response).unwrap()).unwrap();
        assert_eq!(resp["ok"], true);
    }

    #[test]
    fn init_tracing_twice_is_harmless() {
        init_tracing("debug");
        init_tracing("not a [valid filter");
    }
}
