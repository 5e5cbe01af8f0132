use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::LegalEaseService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: String,
	pub message: String,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
	#[serde(rename = "casesLoaded")]
	pub cases_loaded: usize,
	#[serde(rename = "advocatesLoaded")]
	pub advocates_loaded: usize,
}

impl LegalEaseService {
	pub fn health(&self) -> HealthResponse {
		HealthResponse {
			status: "OK".to_string(),
			message: "LegalEase backend is running".to_string(),
			timestamp: OffsetDateTime::now_utc(),
			cases_loaded: self.corpus.cases().len(),
			advocates_loaded: self.corpus.advocates().len(),
		}
	}
}
