use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// On-disk shape of the corpus file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusDocument {
	pub cases: Vec<Case>,
	pub advocates: Vec<Advocate>,
}

/// A case record.
///
/// The typed fields are read out of the source object, which is kept whole and echoed back on
/// serialization with its original key order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Case {
	pub id: u64,
	pub problem_statement: String,
	pub keywords: Vec<String>,
	pub simulated_law: SimulatedLaw,
	pub advocate_id: String,
	record: Map<String, Value>,
}
impl Case {
	/// The source object, including fields the engine does not interpret.
	pub fn record(&self) -> &Map<String, Value> {
		&self.record
	}

	/// The source object with `fields` set on top. An existing key keeps its position and takes
	/// the new value; new keys are appended in order.
	pub fn record_with<I>(&self, fields: I) -> Map<String, Value>
	where
		I: IntoIterator<Item = (&'static str, Value)>,
	{
		merge_record(&self.record, fields)
	}
}
impl TryFrom<Map<String, Value>> for Case {
	type Error = serde_json::Error;

	fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
		let fields: CaseFields = serde_json::from_value(Value::Object(record.clone()))?;

		Ok(Self {
			id: fields.id,
			problem_statement: fields.problem_statement,
			keywords: fields.keywords,
			simulated_law: fields.simulated_law,
			advocate_id: fields.advocate_id,
			record,
		})
	}
}
impl Serialize for Case {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.record.serialize(serializer)
	}
}

/// The interpreted part of a case's `simulated_law` object. Other fields stay in the case record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulatedLaw {
	pub explanation: String,
}

/// An advocate record. Like [`Case`], it serializes as its source object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Advocate {
	pub id: String,
	pub name: String,
	pub specialization: String,
	record: Map<String, Value>,
}
impl Advocate {
	pub fn record(&self) -> &Map<String, Value> {
		&self.record
	}

	pub fn record_with<I>(&self, fields: I) -> Map<String, Value>
	where
		I: IntoIterator<Item = (&'static str, Value)>,
	{
		merge_record(&self.record, fields)
	}

	pub fn to_value(&self) -> Value {
		Value::Object(self.record.clone())
	}
}
impl TryFrom<Map<String, Value>> for Advocate {
	type Error = serde_json::Error;

	fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
		let fields: AdvocateFields = serde_json::from_value(Value::Object(record.clone()))?;

		Ok(Self { id: fields.id, name: fields.name, specialization: fields.specialization, record })
	}
}
impl Serialize for Advocate {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.record.serialize(serializer)
	}
}

/// Lower-cased copies of the searchable fields of a [`Case`], built once at load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseText {
	pub keywords: Vec<String>,
	pub problem_statement: String,
	pub law_explanation: String,
}
impl CaseText {
	pub fn from_case(case: &Case) -> Self {
		Self {
			keywords: case.keywords.iter().map(|keyword| keyword.to_lowercase()).collect(),
			problem_statement: case.problem_statement.to_lowercase(),
			law_explanation: case.simulated_law.explanation.to_lowercase(),
		}
	}
}

#[derive(Deserialize)]
struct CaseFields {
	id: u64,
	problem_statement: String,
	keywords: Vec<String>,
	simulated_law: SimulatedLaw,
	advocate_id: String,
}

#[derive(Deserialize)]
struct AdvocateFields {
	id: String,
	name: String,
	specialization: String,
}

fn merge_record<I>(record: &Map<String, Value>, fields: I) -> Map<String, Value>
where
	I: IntoIterator<Item = (&'static str, Value)>,
{
	let mut merged = record.clone();

	for (key, value) in fields {
		merged.insert(key.to_string(), value);
	}

	merged
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::Case;

	fn case_from(value: serde_json::Value) -> Case {
		serde_json::from_value(value).expect("Failed to parse case.")
	}

	#[test]
	fn echoes_fields_in_source_order() {
		let case = case_from(json!({
			"id": 1,
			"title": "Deposit",
			"problem_statement": "Kept my deposit.",
			"keywords": ["deposit"],
			"simulated_law": { "title": "Tenancy Act", "explanation": "Return it." },
			"advocate_id": "adv_001"
		}));
		let echoed = serde_json::to_string(&case).expect("Failed to serialize case.");

		assert_eq!(
			echoed,
			"{\"id\":1,\"title\":\"Deposit\",\"problem_statement\":\"Kept my deposit.\",\
			 \"keywords\":[\"deposit\"],\"simulated_law\":{\"title\":\"Tenancy Act\",\
			 \"explanation\":\"Return it.\"},\"advocate_id\":\"adv_001\"}"
		);
	}

	#[test]
	fn overrides_replace_existing_keys_in_place() {
		let case = case_from(json!({
			"id": 2,
			"advocate": "stale",
			"problem_statement": "",
			"keywords": ["rent"],
			"simulated_law": { "explanation": "" },
			"advocate_id": "adv_002"
		}));
		let merged = case.record_with([("relevanceScore", json!(7)), ("advocate", json!(null))]);
		let keys = merged.keys().map(String::as_str).collect::<Vec<_>>();

		assert_eq!(keys, vec![
			"id",
			"advocate",
			"problem_statement",
			"keywords",
			"simulated_law",
			"advocate_id",
			"relevanceScore",
		]);
		assert_eq!(merged["advocate"], json!(null));
	}

	#[test]
	fn missing_typed_field_is_rejected() {
		let err = serde_json::from_value::<Case>(json!({ "id": 3, "keywords": ["x"] }))
			.expect_err("Expected missing field error.");

		assert!(err.to_string().contains("missing field"), "Unexpected error: {err}");
	}
}
