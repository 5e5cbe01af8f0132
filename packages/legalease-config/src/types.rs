use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub corpus: Corpus,
	#[serde(default)]
	pub ranking: Ranking,
	#[serde(default)]
	pub advocates: Advocates,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	/// Value of `Access-Control-Allow-Origin`. `None` disables CORS headers.
	#[serde(default = "default_cors_allow_origin")]
	pub cors_allow_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
	/// JSON document holding the `cases` and `advocates` collections. Relative paths are
	/// resolved against the directory of the config file by [`crate::load`].
	pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Ranking {
	pub top_n: u32,
	pub min_term_chars: u32,
	pub weights: RankingWeights,
}
impl Default for Ranking {
	fn default() -> Self {
		Self { top_n: 5, min_term_chars: 3, weights: RankingWeights::default() }
	}
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
	pub keyword: u32,
	pub problem_statement: u32,
	pub law_explanation: u32,
}
impl Default for RankingWeights {
	fn default() -> Self {
		Self { keyword: 10, problem_statement: 5, law_explanation: 2 }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Advocates {
	pub recent_cases_preview: u32,
}
impl Default for Advocates {
	fn default() -> Self {
		Self { recent_cases_preview: 3 }
	}
}

fn default_cors_allow_origin() -> Option<String> {
	Some("*".to_string())
}
