use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use time::OffsetDateTime;

use crate::{Error, LegalEaseService, Result};
use legalease_storage::models::{Advocate, Case};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseListResponse {
	pub cases: Vec<Case>,
	pub total: usize,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

/// Serializes as the case record with `advocate` set on top, `null` when the case references an
/// advocate missing from the corpus.
#[derive(Debug, Clone)]
pub struct CaseDetail {
	pub case: Case,
	pub advocate: Option<Advocate>,
}
impl Serialize for CaseDetail {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.case
			.record_with([(
				"advocate",
				self.advocate.as_ref().map_or(Value::Null, Advocate::to_value),
			)])
			.serialize(serializer)
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseDetailResponse {
	pub case: CaseDetail,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

impl LegalEaseService {
	pub fn list_cases(&self) -> CaseListResponse {
		let cases = self.corpus.cases().to_vec();

		CaseListResponse { total: cases.len(), cases, timestamp: OffsetDateTime::now_utc() }
	}

	/// Looks up a case by its textual id, read like an integer prefix: leading whitespace and a
	/// sign are skipped and trailing non-digits ignored, so `"1abc"` and `"1.0"` both name case 1.
	/// Ids without a leading number are reported as not found.
	pub fn get_case(&self, id: &str) -> Result<CaseDetailResponse> {
		let case = parse_case_id(id)
			.and_then(|case_id| self.corpus.find_case_by_id(case_id))
			.ok_or_else(|| Error::CaseNotFound { id: id.to_string() })?;
		let advocate = self.corpus.find_advocate_by_id(&case.advocate_id).cloned();

		Ok(CaseDetailResponse {
			case: CaseDetail { case: case.clone(), advocate },
			timestamp: OffsetDateTime::now_utc(),
		})
	}
}

fn parse_case_id(raw: &str) -> Option<u64> {
	let trimmed = raw.trim_start();
	let (negative, unsigned) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};
	let digits_end = unsigned.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(unsigned.len());
	let value = unsigned[..digits_end].parse::<u64>().ok()?;

	// Ids are unsigned; "-0" is still zero.
	if negative && value != 0 { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
	use super::parse_case_id;

	#[test]
	fn reads_the_leading_integer() {
		assert_eq!(parse_case_id("7"), Some(7));
		assert_eq!(parse_case_id("1abc"), Some(1));
		assert_eq!(parse_case_id("1.0"), Some(1));
		assert_eq!(parse_case_id("  +12 "), Some(12));
		assert_eq!(parse_case_id("-0"), Some(0));
	}

	#[test]
	fn rejects_ids_without_a_leading_integer() {
		for raw in ["", "abc", "-1", ".5", "+", "a1", "99999999999999999999999"] {
			assert_eq!(parse_case_id(raw), None, "Expected no id for {raw:?}.");
		}
	}
}
