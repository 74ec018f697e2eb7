//! Archive adapters.

mod zip_reader;

pub use zip_reader::ZipArchiveReader;
