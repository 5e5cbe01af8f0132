pub mod ranking;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use time::OffsetDateTime;

use crate::{Error, LegalEaseService, Result};
use legalease_storage::models::{Advocate, Case};
use ranking::{Ranking, rank_cases};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
	/// Raw request value. Only strings are ranked; see [`LegalEaseService::search`].
	#[serde(default)]
	pub query: Option<Value>,
}
impl SearchRequest {
	/// A request from a text-only source such as a form body.
	pub fn from_text(query: Option<String>) -> Self {
		Self { query: query.map(Value::String) }
	}
}

/// A ranked case. Serializes as the case record with `relevanceScore` and `advocate` set on top.
#[derive(Debug, Clone)]
pub struct SearchResult {
	pub case: Case,
	pub relevance_score: u32,
	pub advocate: Option<Advocate>,
}
impl Serialize for SearchResult {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.case
			.record_with([
				("relevanceScore", Value::from(self.relevance_score)),
				("advocate", self.advocate.as_ref().map_or(Value::Null, Advocate::to_value)),
			])
			.serialize(serializer)
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
	pub query: Value,
	pub results: Vec<SearchResult>,
	#[serde(rename = "totalMatches")]
	pub total_matches: usize,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

impl LegalEaseService {
	/// Ranks the corpus against `req.query` and joins each match with its advocate.
	///
	/// A missing, null, empty, `false` or `0` query is rejected. Any other non-string value is
	/// accepted and matches nothing, as does a string without usable terms.
	pub fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let Some(query) = req.query.filter(is_present) else {
			return Err(Error::MissingQuery);
		};
		let ranking = match query.as_str() {
			Some(text) => rank_cases(text, self.corpus.searchable_cases(), &self.policy),
			None => Ranking { terms: Vec::new(), matches: Vec::new() },
		};

		tracing::info!(
			terms = ranking.terms.len(),
			matches = ranking.matches.len(),
			"Search query ranked."
		);

		let results = ranking
			.matches
			.iter()
			.map(|scored| {
				tracing::debug!(
					case_id = scored.case.id,
					score = scored.score,
					keyword = scored.breakdown.keyword,
					problem_statement = scored.breakdown.problem_statement,
					law_explanation = scored.breakdown.law_explanation,
					"Search match."
				);

				SearchResult {
					case: scored.case.clone(),
					relevance_score: scored.score,
					advocate: self.corpus.find_advocate_by_id(&scored.case.advocate_id).cloned(),
				}
			})
			.collect::<Vec<_>>();

		Ok(SearchResponse {
			query,
			total_matches: results.len(),
			results,
			timestamp: OffsetDateTime::now_utc(),
		})
	}
}

fn is_present(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
