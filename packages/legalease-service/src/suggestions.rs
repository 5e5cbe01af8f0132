use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::LegalEaseService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
	pub suggestions: Vec<String>,
	pub total: usize,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

impl LegalEaseService {
	pub fn suggestions(&self) -> SuggestionsResponse {
		let suggestions = self.corpus.suggestions().to_vec();

		SuggestionsResponse {
			total: suggestions.len(),
			suggestions,
			timestamp: OffsetDateTime::now_utc(),
		}
	}
}
