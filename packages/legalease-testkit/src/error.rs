pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to write fixture file at {path:?}.")]
	WriteFixture { path: std::path::PathBuf, source: std::io::Error },

	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
}
