mod score;
mod text;

pub use score::{ScoreBreakdown, score_case};
pub use text::tokenize_query;

use std::cmp::Reverse;

use legalease_config::{Config, RankingWeights};
use legalease_storage::models::{Case, CaseText};

#[derive(Debug, Clone, Copy)]
pub struct RankingPolicy {
	pub top_n: usize,
	pub min_term_chars: usize,
	pub weights: RankingWeights,
}
impl RankingPolicy {
	pub fn from_config(cfg: &Config) -> Self {
		Self {
			top_n: cfg.ranking.top_n as usize,
			min_term_chars: cfg.ranking.min_term_chars as usize,
			weights: cfg.ranking.weights,
		}
	}
}
impl Default for RankingPolicy {
	fn default() -> Self {
		Self { top_n: 5, min_term_chars: 3, weights: RankingWeights::default() }
	}
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredCase<'a> {
	pub case: &'a Case,
	pub score: u32,
	pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone)]
pub struct Ranking<'a> {
	pub terms: Vec<String>,
	pub matches: Vec<ScoredCase<'a>>,
}

/// Ranks `cases` against `query`.
///
/// Cases scoring zero are dropped, the rest are ordered by descending score with ties kept in
/// input order, and at most `policy.top_n` are returned. A query without usable terms ranks
/// nothing.
pub fn rank_cases<'a, I>(query: &str, cases: I, policy: &RankingPolicy) -> Ranking<'a>
where
	I: IntoIterator<Item = (&'a Case, &'a CaseText)>,
{
	let terms = tokenize_query(query, policy.min_term_chars);

	if terms.is_empty() {
		return Ranking { terms, matches: Vec::new() };
	}

	let mut matches = cases
		.into_iter()
		.filter_map(|(case, text)| {
			let breakdown = score_case(&terms, text, &policy.weights);
			let score = breakdown.total();

			(score > 0).then_some(ScoredCase { case, score, breakdown })
		})
		.collect::<Vec<_>>();

	// Stable, so equal scores keep corpus order.
	matches.sort_by_key(|scored| Reverse(scored.score));
	matches.truncate(policy.top_n);

	Ranking { terms, matches }
}
