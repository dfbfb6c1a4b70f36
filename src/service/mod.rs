//! Request handling around the engine: validation, rate limiting and the
//! response cache.

use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::engine::Engine;
use crate::errors::BriefError;
use crate::limit::RateLimiter;
use crate::safety;
use crate::store::{cache_key, MemoryStore, Store};
use crate::wire::{ImproveRequest, ImproveResponse};

pub struct Service {
    engine: Engine,
    cache: Arc<dyn Store<ImproveResponse>>,
    limiter: RateLimiter,
    config: Config,
}

impl Service {
    pub fn new(config: Config) -> Self {
        let cache: Arc<dyn Store<ImproveResponse>> =
            Arc::new(MemoryStore::<ImproveResponse>::new(config.cache_max_entries));
        Self::with_store(config, cache)
    }

    /// Use a caller-provided store, e.g. one shared between services.
    pub fn with_store(config: Config, cache: Arc<dyn Store<ImproveResponse>>) -> Self {
        Self {
            engine: Engine::new(config.default_lang),
            limiter: RateLimiter::new(config.rate_limit_window(), config.rate_limit_max_requests),
            cache,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &dyn Store<ImproveResponse> {
        self.cache.as_ref()
    }

    pub fn handle(&self, req: &ImproveRequest) -> Result<ImproveResponse, BriefError> {
        let idea = safety::validate_idea(&req.idea, self.config.max_input_chars)?;
        self.limiter.check(req.client.as_deref())?;

        let hints = req.merged_hints();
        let lang = self.engine.resolve_lang(&hints, req.output_lang());
        let include_details = req.include_details.unwrap_or(self.config.include_details);

        let key = cache_key(idea, &hints, include_details, lang);
        if let Some(mut hit) = self.cache.get(&key) {
            debug!(%lang, "cache hit");
            hit.cached = true;
            return Ok(hit);
        }

        let out = self.engine.run(idea, &hints, Some(lang));
        let resp = ImproveResponse::from_output(out, include_details);
        self.cache.set(key, resp.clone(), self.config.cache_ttl());
        Ok(resp)
    }
}

/// Counts over one batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub ok: usize,
    pub cached: usize,
    pub blueprints: usize,
    pub rejected: usize,
    pub rate_limited: usize,
    pub mean_ms: f64,
}

impl Service {
    /// Handle requests in parallel. Results keep input order; `tick` runs
    /// once per finished request.
    pub fn handle_batch<F>(
        &self,
        reqs: &[ImproveRequest],
        tick: F,
    ) -> Vec<Result<ImproveResponse, BriefError>>
    where
        F: Fn() + Sync,
    {
        reqs.par_iter()
            .map(|req| {
                let res = self.handle(req);
                tick();
                res
            })
            .collect()
    }
}

impl BatchSummary {
    pub fn from_results(results: &[Result<ImproveResponse, BriefError>]) -> Self {
        let mut s = BatchSummary { total: results.len(), ..Default::default() };
        let mut fresh_ms = 0.0;
        let mut fresh = 0usize;
        for r in results {
            match r {
                Ok(resp) => {
                    s.ok += 1;
                    if resp.cached {
                        s.cached += 1;
                    } else {
                        fresh += 1;
                        fresh_ms += resp.processing_ms;
                    }
                    if resp.blueprint.is_some() {
                        s.blueprints += 1;
                    }
                }
                Err(BriefError::RateLimited { .. }) => s.rate_limited += 1,
                Err(_) => s.rejected += 1,
            }
        }
        if fresh > 0 {
            s.mean_ms = fresh_ms / fresh as f64;
        }
        s
    }
}
