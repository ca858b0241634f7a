mod local;

pub use local::LocalFileReader;

use anyhow::Result;

/// Trait for random access reading from a data source
pub trait ReadAt: Send + Sync {
    /// Fill the buffer with data starting at the specified offset
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize>;

    /// Get the total size of the data source
    fn size(&self) -> u64;
}
