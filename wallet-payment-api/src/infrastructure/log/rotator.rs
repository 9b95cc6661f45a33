use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::Local;

/// Appends to `base_path` and rotates to `log.1.txt`, `log.2.txt`, ... once the
/// current file reaches `max_size` bytes. At most `max_files` rotated files are kept.
#[derive(Clone)]
pub struct SizeRotatingWriter {
    inner: Arc<Mutex<InnerWriter>>,
}

struct InnerWriter {
    base_path: PathBuf,
    max_size: u64,
    max_files: usize,
    current_file: File,
}

impl SizeRotatingWriter {
    pub fn new(
        base_path: PathBuf,
        max_size: u64,
        max_files: usize,
    ) -> Result<Self, crate::SystemError> {
        let file = Self::create_file(&base_path)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(InnerWriter {
                base_path,
                max_size,
                max_files: max_files.max(1),
                current_file: file,
            })),
        })
    }

    // 第一行写入创建时间
    fn create_file(base_path: &Path) -> io::Result<File> {
        let mut file = OpenOptions::new().create(true).append(true).open(base_path)?;
        if file.metadata()?.len() == 0 {
            writeln!(file, "{}", Local::now().timestamp())?;
        }
        Ok(file)
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, InnerWriter>> {
        self.inner
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

impl Write for SizeRotatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock()?;

        let metadata = inner.current_file.metadata()?;
        if metadata.len() >= inner.max_size {
            inner.current_file.flush()?;
            rotate_files(&inner.base_path, inner.max_files)?;
            inner.current_file = Self::create_file(&inner.base_path)?;
        }

        inner.current_file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.current_file.flush()
    }
}

fn rotated_path(base_path: &Path, index: usize) -> PathBuf {
    base_path.with_extension(format!("{index}.txt"))
}

fn rotate_files(base_path: &Path, max_files: usize) -> io::Result<()> {
    let oldest = rotated_path(base_path, max_files);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }

    for i in (1..max_files).rev() {
        let from = rotated_path(base_path, i);
        if from.exists() {
            fs::rename(from, rotated_path(base_path, i + 1))?;
        }
    }

    if base_path.exists() {
        fs::rename(base_path, rotated_path(base_path, 1))?;
    }

    Ok(())
}
