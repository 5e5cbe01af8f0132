pub mod corpus;
pub mod models;

mod error;

pub use corpus::Corpus;
pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
