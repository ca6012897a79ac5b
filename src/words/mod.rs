pub mod traits;
pub mod word_list;

pub use traits::WordSupplier;
pub use word_list::WordList;

#[cfg(test)]
pub use traits::MockWordSupplier;
