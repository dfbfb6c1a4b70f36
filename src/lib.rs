pub mod classify;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod errors;
pub mod i18n;
pub mod limit;
pub mod log;
pub mod merge;
pub mod model;
pub mod plan;
pub mod prompt;
pub mod safety;
pub mod service;
pub mod store;
pub mod ux;
pub mod vocab;
pub mod wire;

pub use engine::{Engine, EngineOutput};
pub use errors::BriefError;
pub use merge::Hints;
pub use model::{FeatureVector, OutputLang, SiteType};
