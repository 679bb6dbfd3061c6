pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies that `index` addresses one of the first `len` elements.
#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range()
    }
}

#[cold]
pub fn out_of_range<T>() -> Result<T> {
    Err(crate::error::Error::out_of_range())
}
