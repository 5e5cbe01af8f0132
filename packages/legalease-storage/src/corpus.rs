use std::{
	collections::{BTreeSet, HashMap, hash_map::Entry},
	fs,
	path::Path,
};

use crate::{
	Error, Result,
	models::{Advocate, Case, CaseText, CorpusDocument},
};

/// Immutable in-memory corpus of cases and advocates.
///
/// Built once at startup and shared read-only afterwards. All lookups are index-backed and
/// report absence with `None`.
#[derive(Debug)]
pub struct Corpus {
	cases: Vec<Case>,
	case_texts: Vec<CaseText>,
	advocates: Vec<Advocate>,
	case_by_id: HashMap<u64, usize>,
	advocate_by_id: HashMap<String, usize>,
	cases_by_advocate: HashMap<String, Vec<usize>>,
	suggestions: Vec<String>,
}
impl Corpus {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadCorpus { path: path.to_path_buf(), source: err })?;

		Self::from_json_str(&raw)
	}

	pub fn from_json_str(raw: &str) -> Result<Self> {
		let document: CorpusDocument = serde_json::from_str(raw)?;

		Self::new(document.cases, document.advocates)
	}

	pub fn new(cases: Vec<Case>, advocates: Vec<Advocate>) -> Result<Self> {
		let mut case_by_id = HashMap::with_capacity(cases.len());
		let mut cases_by_advocate: HashMap<String, Vec<usize>> = HashMap::new();
		let mut keywords = BTreeSet::new();

		for (idx, case) in cases.iter().enumerate() {
			if case.keywords.is_empty() {
				return Err(Error::EmptyKeywords(case.id));
			}
			if case_by_id.insert(case.id, idx).is_some() {
				return Err(Error::DuplicateCaseId(case.id));
			}

			cases_by_advocate.entry(case.advocate_id.clone()).or_default().push(idx);
			keywords.extend(case.keywords.iter().map(String::as_str));
		}

		let mut advocate_by_id = HashMap::with_capacity(advocates.len());

		for (idx, advocate) in advocates.iter().enumerate() {
			match advocate_by_id.entry(advocate.id.clone()) {
				Entry::Occupied(_) => return Err(Error::DuplicateAdvocateId(advocate.id.clone())),
				Entry::Vacant(slot) => {
					slot.insert(idx);
				},
			}
		}

		let suggestions = keywords.into_iter().map(str::to_string).collect();
		let case_texts = cases.iter().map(CaseText::from_case).collect();

		Ok(Self {
			cases,
			case_texts,
			advocates,
			case_by_id,
			advocate_by_id,
			cases_by_advocate,
			suggestions,
		})
	}

	/// Cases in corpus order.
	pub fn cases(&self) -> &[Case] {
		&self.cases
	}

	pub fn advocates(&self) -> &[Advocate] {
		&self.advocates
	}

	/// Cases paired with their normalized text, in corpus order.
	pub fn searchable_cases(&self) -> impl Iterator<Item = (&Case, &CaseText)> {
		self.cases.iter().zip(&self.case_texts)
	}

	pub fn find_case_by_id(&self, id: u64) -> Option<&Case> {
		self.case_by_id.get(&id).map(|&idx| &self.cases[idx])
	}

	pub fn find_advocate_by_id(&self, id: &str) -> Option<&Advocate> {
		self.advocate_by_id.get(id).map(|&idx| &self.advocates[idx])
	}

	/// Cases handled by `advocate_id`, in corpus order. The advocate itself need not exist.
	pub fn find_cases_by_advocate_id(&self, advocate_id: &str) -> Vec<&Case> {
		self.cases_by_advocate
			.get(advocate_id)
			.map(|indices| indices.iter().map(|&idx| &self.cases[idx]).collect())
			.unwrap_or_default()
	}

	/// Distinct keywords across all cases, sorted. Keywords are kept exactly as stored.
	pub fn suggestions(&self) -> &[String] {
		&self.suggestions
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::Corpus;
	use crate::{
		Error,
		models::{Advocate, Case},
	};

	fn case(id: u64, advocate_id: &str, keywords: &[&str]) -> Case {
		serde_json::from_value(json!({
			"id": id,
			"problem_statement": format!("Problem {id}"),
			"keywords": keywords,
			"simulated_law": { "explanation": format!("Explanation {id}") },
			"advocate_id": advocate_id,
		}))
		.expect("Failed to build case.")
	}

	fn advocate(id: &str) -> Advocate {
		serde_json::from_value(json!({
			"id": id,
			"name": format!("Advocate {id}"),
			"specialization": "General Practice",
		}))
		.expect("Failed to build advocate.")
	}

	fn sample() -> Corpus {
		Corpus::new(
			vec![
				case(1, "adv_001", &["Security Deposit", "landlord"]),
				case(2, "adv_002", &["wrongful termination"]),
				case(3, "adv_001", &["eviction", "landlord"]),
				case(4, "adv_missing", &["contract"]),
			],
			vec![advocate("adv_001"), advocate("adv_002")],
		)
		.expect("Failed to build corpus.")
	}

	#[test]
	fn finds_case_by_id() {
		let corpus = sample();

		assert_eq!(corpus.find_case_by_id(3).map(|case| case.id), Some(3));
		assert!(corpus.find_case_by_id(99).is_none());
	}

	#[test]
	fn finds_advocate_by_id() {
		let corpus = sample();

		assert_eq!(
			corpus.find_advocate_by_id("adv_002").map(|advocate| advocate.name.as_str()),
			Some("Advocate adv_002")
		);
		assert!(corpus.find_advocate_by_id("nonexistent").is_none());
	}

	#[test]
	fn cases_by_advocate_keep_corpus_order() {
		let corpus = sample();
		let ids: Vec<u64> =
			corpus.find_cases_by_advocate_id("adv_001").iter().map(|case| case.id).collect();

		assert_eq!(ids, vec![1, 3]);
		assert!(corpus.find_cases_by_advocate_id("adv_404").is_empty());
	}

	#[test]
	fn orphaned_advocate_reference_is_tolerated() {
		let corpus = sample();

		assert!(corpus.find_advocate_by_id("adv_missing").is_none());
		assert_eq!(corpus.find_cases_by_advocate_id("adv_missing").len(), 1);
	}

	#[test]
	fn suggestions_are_distinct_and_sorted() {
		let corpus = sample();

		assert_eq!(
			corpus.suggestions(),
			["Security Deposit", "contract", "eviction", "landlord", "wrongful termination"]
		);
	}

	#[test]
	fn case_text_is_lower_cased() {
		let corpus = sample();
		let (_, text) = corpus.searchable_cases().next().expect("Expected a case.");

		assert_eq!(text.keywords, vec!["security deposit".to_string(), "landlord".to_string()]);
		assert_eq!(text.problem_statement, "problem 1");
		assert_eq!(text.law_explanation, "explanation 1");
	}

	#[test]
	fn rejects_duplicate_case_ids() {
		let err = Corpus::new(vec![case(1, "a", &["x"]), case(1, "b", &["y"])], Vec::new())
			.expect_err("Expected duplicate id error.");

		assert!(matches!(err, Error::DuplicateCaseId(1)));
	}

	#[test]
	fn rejects_duplicate_advocate_ids() {
		let err = Corpus::new(Vec::new(), vec![advocate("adv_001"), advocate("adv_001")])
			.expect_err("Expected duplicate id error.");

		assert!(matches!(err, Error::DuplicateAdvocateId(id) if id == "adv_001"));
	}

	#[test]
	fn rejects_cases_without_keywords() {
		let err = Corpus::new(vec![case(7, "a", &[])], Vec::new())
			.expect_err("Expected empty keywords error.");

		assert!(matches!(err, Error::EmptyKeywords(7)));
	}
}
