use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Failures raised by the MongoDB backend, one variant per operation class.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        uri: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        #[source]
        source: MongoError,
    },
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        attempts: u32,
        #[source]
        source: MongoError,
    },
    #[error("MongoDB ping health check failed")]
    HealthPing {
        #[source]
        source: MongoError,
    },
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        collection: &'static str,
        index: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("unique constraint violated in `{collection}`")]
    DuplicateKey { collection: &'static str },
    #[error("failed to write document to `{collection}`")]
    Write {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to load document from `{collection}`")]
    Load {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to list documents from `{collection}`")]
    List {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to delete document from `{collection}`")]
    Delete {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to count documents in `{collection}`")]
    Count {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
}

/// Map a write failure to either the unique-constraint variant or a plain write error.
pub(super) fn classify_write(collection: &'static str, source: MongoError) -> MongoDaoError {
    if is_duplicate_key(&source) {
        MongoDaoError::DuplicateKey { collection }
    } else {
        MongoDaoError::Write { collection, source }
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_err)) if write_err.code == 11_000
    )
}
