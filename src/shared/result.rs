/// Result alias used by every fallible operation in the crate.
///
/// Errors are carried as `anyhow::Error` so `SbomError` values and I/O causes
/// chain together for the final diagnostic.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
