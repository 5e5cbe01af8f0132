mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Advocates, Config, Corpus, Ranking, RankingWeights, Service};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::invalid("service.http_bind", "must be non-empty."));
	}
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::invalid(
			"service.http_bind",
			"must be a socket address such as 127.0.0.1:5000.",
		));
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::invalid("service.log_level", "must be non-empty."));
	}
	if cfg.corpus.path.as_os_str().is_empty() {
		return Err(Error::invalid("corpus.path", "must be non-empty."));
	}
	if cfg.ranking.top_n == 0 {
		return Err(Error::invalid("ranking.top_n", "must be greater than zero."));
	}
	if cfg.ranking.min_term_chars == 0 {
		return Err(Error::invalid("ranking.min_term_chars", "must be greater than zero."));
	}

	let weights = &cfg.ranking.weights;

	if weights.keyword == 0 {
		return Err(Error::invalid("ranking.weights.keyword", "must be greater than zero."));
	}
	if weights.keyword <= weights.problem_statement || weights.keyword <= weights.law_explanation
	{
		return Err(Error::invalid(
			"ranking.weights.keyword",
			"must be greater than ranking.weights.problem_statement and ranking.weights.law_explanation.",
		));
	}

	Ok(())
}

fn normalize(cfg: &mut Config, config_dir: Option<&Path>) {
	if cfg
		.service
		.cors_allow_origin
		.as_deref()
		.map(|origin| origin.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.service.cors_allow_origin = None;
	}
	if let Some(dir) = config_dir
		&& cfg.corpus.path.is_relative()
		&& !cfg.corpus.path.as_os_str().is_empty()
	{
		cfg.corpus.path = dir.join(&cfg.corpus.path);
	}
}
