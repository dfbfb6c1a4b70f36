use clap::Parser;

use crate::model::{OutputLang, SiteType};

#[derive(Parser, Debug)]
#[command(name = "vibe_brief", version, about = "Turn a rough website idea into a build-ready brief")]
pub struct Args {
    /// The idea text. Read from --file or stdin when omitted.
    pub idea: Option<String>,

    #[arg(long, conflicts_with = "idea")]
    pub file: Option<String>,

    /// Inline JSON object or a path to a JSON file.
    #[arg(long)]
    pub hints: Option<String>,

    #[arg(long, value_enum)]
    pub site_type: Option<SiteType>,

    #[arg(long, value_enum)]
    pub lang: Option<OutputLang>,

    /// Always render the project blueprint.
    #[arg(long, default_value_t = false)]
    pub project: bool,

    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Include the feature vector in the output.
    #[arg(long, default_value_t = false)]
    pub details: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// JSON-lines file with one request per line.
    #[arg(long, conflicts_with_all = ["idea", "file"])]
    pub batch: Option<String>,

    #[arg(long)]
    pub config: Option<String>,

    /// Save request and response artifacts.
    #[arg(long, default_value_t = false)]
    pub save: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hint_flags() {
        let args = Args::try_parse_from([
            "vibe_brief", "a shop", "--site-type", "ecommerce", "--lang", "ar",
            "--feature", "FAQ", "--feature", "Blog", "--project",
        ])
        .unwrap();
        assert_eq!(args.idea.as_deref(), Some("a shop"));
        assert_eq!(args.site_type, Some(SiteType::Ecommerce));
        assert_eq!(args.lang, Some(OutputLang::Ar));
        assert_eq!(args.features, vec!["FAQ", "Blog"]);
        assert!(args.project);
    }

    #[test]
    fn batch_conflicts_with_idea() {
        assert!(Args::try_parse_from(["vibe_brief", "x", "--batch", "in.jsonl"]).is_err());
    }
}
