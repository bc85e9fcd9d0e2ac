use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty corpus: the reference catalog contains no items")]
    EmptyCorpus,

    #[error("No vocabulary: no term survived tokenization of the catalog")]
    NoVocabulary,

    #[error("Invalid top_n: expected a positive count, got {0}")]
    InvalidTopN(usize),
}
