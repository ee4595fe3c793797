use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Node returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected RPC response: {0}")]
    InvalidResponse(String),

    #[error("Invalid address or object id: {0}")]
    InvalidAddress(String),

    #[error("Invalid object digest: {0}")]
    InvalidDigest(String),

    #[error("Invalid Move call target: {0}")]
    InvalidMoveTarget(String),

    #[error("Transaction has more than 65535 inputs or commands ({0})")]
    TooManyArguments(usize),

    #[error("Argument refers to command {0}, which does not precede it")]
    UnknownResult(usize),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Invalid admin key: {0}")]
    InvalidKey(String),

    #[error("BCS serialization failed: {0}")]
    Bcs(#[from] bcs::Error),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Insufficient gas: budget {required} MIST but only {available} MIST available")]
    InsufficientGas { required: u64, available: u64 },

    #[error("Pagination aborted: {0}")]
    Pagination(String),

    #[error("Package build failed: {0}")]
    Build(String),

    #[error("Publish response contains no published package")]
    MissingPackageId,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
