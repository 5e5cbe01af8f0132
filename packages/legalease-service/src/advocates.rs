use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use time::OffsetDateTime;

use crate::{Error, LegalEaseService, Result};
use legalease_storage::models::{Advocate, Case};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvocateListResponse {
	pub advocates: Vec<Advocate>,
	pub total: usize,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

/// Serializes as the advocate record with `casesHandled` and `recentCases` set on top.
#[derive(Debug, Clone)]
pub struct AdvocateProfile {
	pub advocate: Advocate,
	pub cases_handled: usize,
	/// First cases handled by the advocate, in corpus order.
	pub recent_cases: Vec<Case>,
}
impl Serialize for AdvocateProfile {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let recent_cases =
			self.recent_cases.iter().map(|case| Value::Object(case.record().clone())).collect();

		self.advocate
			.record_with([
				("casesHandled", Value::from(self.cases_handled)),
				("recentCases", Value::Array(recent_cases)),
			])
			.serialize(serializer)
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvocateProfileResponse {
	pub advocate: AdvocateProfile,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

impl LegalEaseService {
	pub fn list_advocates(&self) -> AdvocateListResponse {
		let advocates = self.corpus.advocates().to_vec();

		AdvocateListResponse {
			total: advocates.len(),
			advocates,
			timestamp: OffsetDateTime::now_utc(),
		}
	}

	pub fn get_advocate(&self, id: &str) -> Result<AdvocateProfileResponse> {
		let Some(advocate) = self.corpus.find_advocate_by_id(id) else {
			return Err(Error::AdvocateNotFound { id: id.to_string() });
		};
		let handled = self.corpus.find_cases_by_advocate_id(id);
		let recent_cases =
			handled.iter().take(self.recent_cases_preview).map(|&case| case.clone()).collect();

		Ok(AdvocateProfileResponse {
			advocate: AdvocateProfile {
				advocate: advocate.clone(),
				cases_handled: handled.len(),
				recent_cases,
			},
			timestamp: OffsetDateTime::now_utc(),
		})
	}
}
