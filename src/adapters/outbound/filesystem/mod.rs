/// Filesystem adapters for hashing inputs and writing the document
mod file_hasher;
mod file_writer;

pub use file_hasher::Sha256FileHasher;
pub use file_writer::{FileSystemWriter, OUTPUT_FILE_NAME};
