pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[cold]
pub fn unsorted_input(side: &str) -> Result<()> {
    Err(crate::error::Error::unsorted(side))
}
