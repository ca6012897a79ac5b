pub mod text_file;

pub use text_file::{LocalTextFileStore, TextFileStore};

#[cfg(test)]
pub use text_file::MockTextFileStore;
