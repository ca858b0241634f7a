use super::ReadAt;
use anyhow::{Result, bail};
use std::path::Path;

/// Local file reader with random access support
pub struct LocalFileReader {
    file: std::fs::File,
    size: u64,
}

impl LocalFileReader {
    pub fn new(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let size = file.metadata()?.len();
        Ok(Self { file, size })
    }
}

impl ReadAt for LocalFileReader {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        if offset + buf.len() as u64 > self.size {
            bail!("Read past end of file");
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileExt;
            self.file.read_exact_at(buf, offset)?;
            Ok(buf.len())
        }

        #[cfg(windows)]
        {
            use std::os::windows::fs::FileExt;
            // Windows has no pread equivalent that leaves the cursor alone,
            // but seek_read on a shared handle is fine for our single-scan use.
            let mut filled = 0;
            while filled < buf.len() {
                let n = self.file.seek_read(&mut buf[filled..], offset + filled as u64)?;
                if n == 0 {
                    bail!("Read past end of file");
                }
                filled += n;
            }
            Ok(buf.len())
        }

        #[cfg(not(any(unix, windows)))]
        {
            use std::io::{Read, Seek, SeekFrom};
            // &File implements Read + Seek, so a shared handle works here too
            let mut file = &self.file;
            file.seek(SeekFrom::Start(offset))?;
            file.read_exact(buf)?;
            Ok(buf.len())
        }
    }

    fn size(&self) -> u64 {
        self.size
    }
}
