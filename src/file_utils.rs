use anyhow::{Result, Context};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

// @module: File and directory utilities

/// Magic bytes at the start of every PDF file
const PDF_MAGIC: &[u8] = b"%PDF-";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @checks: PDF magic bytes, not just the file extension
    pub fn is_pdf_file<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        if !path.is_file() {
            return false;
        }
        match fs::read(path) {
            Ok(bytes) => Self::is_pdf_bytes(&bytes),
            Err(_) => false,
        }
    }

    /// Check whether a byte buffer looks like a PDF upload
    pub fn is_pdf_bytes(bytes: &[u8]) -> bool {
        bytes.starts_with(PDF_MAGIC)
    }

    // @generates: Output path for the translated summary
    // @params: input_file, output_dir, target_language
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        target_language: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(target_language);
        output_filename.push_str(".txt");

        output_dir.join(output_filename)
    }

    /// Find PDF files under a directory.
    ///
    /// Matches on extension first, then on the magic bytes; a `.pdf` file
    /// holding something else is skipped.
    pub fn find_pdf_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case("pdf")
                        && Self::is_pdf_file(path)
                    {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file into a byte buffer
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}

/// Scoped temporary file holding an uploaded document.
///
/// The underlying file is removed when the value is dropped, on every exit
/// path. Extraction failures must not leave the upload behind on disk.
pub struct TempUpload {
    file: NamedTempFile,
}

impl TempUpload {
    /// Persist uploaded bytes into a fresh temporary file
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut file = NamedTempFile::new()
            .context("Failed to create temporary upload file")?;
        file.write_all(bytes)
            .context("Failed to write upload to temporary file")?;
        file.flush()
            .context("Failed to flush temporary upload file")?;
        Ok(Self { file })
    }

    /// Path of the temporary file while the guard is alive
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
