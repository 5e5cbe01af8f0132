use serde::{Deserialize, Serialize};

use legalease_config::RankingWeights;
use legalease_storage::models::CaseText;

/// Per-signal contributions to a relevance score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
	pub keyword: u32,
	pub problem_statement: u32,
	pub law_explanation: u32,
}
impl ScoreBreakdown {
	pub fn total(&self) -> u32 {
		self.keyword.saturating_add(self.problem_statement).saturating_add(self.law_explanation)
	}
}

/// Scores one case against already-tokenized query terms.
///
/// Keywords are matched over the full keyword × term cross-product with substring containment
/// in either direction, so one term can hit several keywords and one keyword several terms.
/// The problem statement and law explanation award their weight at most once per term.
pub fn score_case(terms: &[String], text: &CaseText, weights: &RankingWeights) -> ScoreBreakdown {
	let mut breakdown = ScoreBreakdown::default();

	for keyword in &text.keywords {
		for term in terms {
			if keyword.contains(term.as_str()) || term.contains(keyword.as_str()) {
				breakdown.keyword = breakdown.keyword.saturating_add(weights.keyword);
			}
		}
	}

	breakdown.problem_statement =
		field_signal(terms, &text.problem_statement, weights.problem_statement);
	breakdown.law_explanation = field_signal(terms, &text.law_explanation, weights.law_explanation);

	breakdown
}

fn field_signal(terms: &[String], field: &str, weight: u32) -> u32 {
	terms
		.iter()
		.filter(|term| field.contains(term.as_str()))
		.fold(0_u32, |acc, _| acc.saturating_add(weight))
}
