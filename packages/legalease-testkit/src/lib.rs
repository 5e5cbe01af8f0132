mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use serde_json::Value;

/// Ten cases and four advocates. Case 8 references `adv_099`, which does not exist, and
/// `adv_001` handles four cases.
pub const SAMPLE_CORPUS_JSON: &str = include_str!("../fixtures/legal-cases.json");

/// A file under the system temp directory, removed on drop.
#[derive(Debug)]
pub struct TempFile {
	path: PathBuf,
}
impl TempFile {
	pub fn write(prefix: &str, extension: &str, contents: &str) -> Result<Self> {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let nanos =
			SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_nanos()).unwrap_or(0);
		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let pid = std::process::id();
		let path = env::temp_dir().join(format!("{prefix}_{nanos}_{pid}_{ordinal}.{extension}"));

		fs::write(&path, contents)
			.map_err(|err| Error::WriteFixture { path: path.clone(), source: err })?;

		Ok(Self { path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}
impl Drop for TempFile {
	fn drop(&mut self) {
		if let Err(err) = fs::remove_file(&self.path) {
			eprintln!("Test fixture cleanup failed for {:?}: {err}.", self.path);
		}
	}
}

pub fn sample_corpus() -> Result<Value> {
	Ok(serde_json::from_str(SAMPLE_CORPUS_JSON)?)
}

pub fn write_corpus(document: &Value) -> Result<TempFile> {
	let raw = serde_json::to_string_pretty(document)?;

	TempFile::write("legalease_corpus", "json", &raw)
}

pub fn write_sample_corpus() -> Result<TempFile> {
	TempFile::write("legalease_corpus", "json", SAMPLE_CORPUS_JSON)
}

/// Writes a minimal service config pointing at `corpus_path`.
pub fn write_config(corpus_path: &Path) -> Result<TempFile> {
	let corpus_path = Value::String(corpus_path.display().to_string());
	let payload = format!(
		"\
[service]
http_bind = \"127.0.0.1:0\"
log_level = \"warn\"

[corpus]
path = {corpus_path}
"
	);

	TempFile::write("legalease_config", "toml", &payload)
}

/// One case row for [`corpus_document`].
#[derive(Debug, Clone, Copy)]
pub struct CaseRow<'a> {
	pub id: u64,
	pub advocate_id: &'a str,
	pub keywords: &'a [&'a str],
	pub problem_statement: &'a str,
	pub explanation: &'a str,
}

/// Builds a corpus document from case rows and `(id, name, specialization)` advocates.
pub fn corpus_document(cases: &[CaseRow<'_>], advocates: &[(&str, &str, &str)]) -> Value {
	let cases = cases
		.iter()
		.map(|row| {
			serde_json::json!({
				"id": row.id,
				"problem_statement": row.problem_statement,
				"keywords": row.keywords,
				"simulated_law": { "explanation": row.explanation },
				"advocate_id": row.advocate_id,
			})
		})
		.collect::<Vec<_>>();
	let advocates = advocates
		.iter()
		.map(|(id, name, specialization)| {
			serde_json::json!({ "id": id, "name": name, "specialization": specialization })
		})
		.collect::<Vec<_>>();

	serde_json::json!({ "cases": cases, "advocates": advocates })
}
