use super::class_header_reader::read_class_header;
use crate::enforcement::domain::DependencyReference;
use crate::ports::outbound::DiagnosticLogger;
use crate::shared::Result;
use anyhow::Context;
use std::fs::File;
use zip::ZipArchive;

/// File extension identifying compiled class entries inside a jar.
const CLASS_EXTENSION: &str = ".class";

/// Scans packaged archives for class files above a maximum bytecode level.
///
/// The scan short-circuits: the first class entry over the maximum decides
/// the whole archive. Entries whose magic number is not a class file's are
/// reported at debug level and skipped; they never count as a violation.
pub struct ArchiveScanner<'a, L: DiagnosticLogger> {
    max_bytecode_level: u16,
    logger: &'a L,
}

impl<'a, L: DiagnosticLogger> ArchiveScanner<'a, L> {
    pub fn new(max_bytecode_level: u16, logger: &'a L) -> Self {
        Self {
            max_bytecode_level,
            logger,
        }
    }

    /// Returns true as soon as one class entry exceeds the maximum level.
    ///
    /// Any I/O or archive error escalates to the caller and aborts the whole
    /// evaluation; the file handle is released on every exit path by scope.
    pub fn exceeds_bytecode_level(&self, reference: &DependencyReference) -> Result<bool> {
        let file = File::open(reference.archive_path()).with_context(|| {
            format!(
                "Failed to open archive for {}: {}",
                reference,
                reference.archive_path().display()
            )
        })?;
        let mut archive = ZipArchive::new(file)
            .with_context(|| format!("Failed to read archive for {}", reference))?;

        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .with_context(|| format!("Failed to read archive entry in {}", reference))?;
            if entry.is_dir() || !entry.name().ends_with(CLASS_EXTENSION) {
                continue;
            }
            let name = entry.name().to_string();
            let header = read_class_header(&mut entry)
                .with_context(|| format!("Truncated class entry {} in {}", name, reference))?;
            if !header.is_valid_class() {
                self.logger
                    .debug(&format!("{} contains an invalid class: {}", reference, name));
                continue;
            }
            if header.major_version() > self.max_bytecode_level {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
