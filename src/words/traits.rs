/// Supplies random words from an opaque corpus.
#[cfg_attr(test, mockall::automock)]
pub trait WordSupplier: Send + Sync {
    fn next_word(&self) -> String;
}
