pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Query parameter is required.")]
	MissingQuery,
	#[error("No case found with ID {id}")]
	CaseNotFound { id: String },
	#[error("No advocate found with ID {id}")]
	AdvocateNotFound { id: String },
}
