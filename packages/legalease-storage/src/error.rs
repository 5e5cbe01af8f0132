#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read corpus file at {path:?}.")]
	ReadCorpus { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse corpus document.")]
	ParseCorpus(#[from] serde_json::Error),
	#[error("Duplicate case id {0}.")]
	DuplicateCaseId(u64),
	#[error("Duplicate advocate id {0:?}.")]
	DuplicateAdvocateId(String),
	#[error("Case {0} has no keywords.")]
	EmptyKeywords(u64),
}
