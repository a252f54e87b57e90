use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("index serialisation error: {0}")]
    IndexSerialisation(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("index deserialisation error: {0}")]
    IndexDeserialisation(#[from] ciborium::de::Error<std::io::Error>),

    #[error("could not initialise the logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("n-gram size {0} is out of range, it must not be negative")]
    NegativeNgramSize(isize),

    #[error("the corpus has {source_count} source sentences but {target_count} target sentences")]
    CorpusLengthMismatch {
        source_count: usize,
        target_count: usize,
    },

    #[error("the alignment files have {source_count} source lines but {target_count} target lines")]
    SavedAlignmentLengthMismatch {
        source_count: usize,
        target_count: usize,
    },

    #[error("the weight {0:?} is not of the form name=value")]
    InvalidWeight(String),
}
