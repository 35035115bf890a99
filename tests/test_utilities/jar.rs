use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// The 8-byte prefix of a class file with the given major version.
pub fn class_bytes(major: u16) -> Vec<u8> {
    let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00];
    bytes.extend_from_slice(&major.to_be_bytes());
    bytes
}

/// Writes a jar with the given entries into `dir`; an entry name ending in
/// '/' becomes a directory entry.
pub fn write_jar(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (entry_name, bytes) in entries {
        if entry_name.ends_with('/') {
            writer.add_directory(*entry_name, options).unwrap();
        } else {
            writer.start_file(*entry_name, options).unwrap();
            writer.write_all(bytes).unwrap();
        }
    }
    writer.finish().unwrap();
    path
}

/// Installs a jar into a Maven-layout repository root and returns its path.
pub fn install_jar(
    root: &Path,
    group_id: &str,
    artifact: &str,
    version: &str,
    entries: &[(&str, &[u8])],
) -> PathBuf {
    let dir = root
        .join(group_id.replace('.', "/"))
        .join(artifact)
        .join(version);
    fs::create_dir_all(&dir).unwrap();
    write_jar(&dir, &format!("{}-{}.jar", artifact, version), entries)
}
