use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BriefError {
    #[error("idea text is empty")] EmptyIdea,
    #[error("idea is {len} characters long; the limit is {max}")] IdeaTooLong { len: usize, max: usize },
    #[error("invalid hints: {0}")] InvalidHints(String),
    #[error("rate limit exceeded for `{identity}`; retry in {retry_after_secs}s")]
    RateLimited { identity: String, retry_after_secs: u64 },
    #[error("config error: {0}")] Config(String),
}
