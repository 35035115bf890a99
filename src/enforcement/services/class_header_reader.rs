use crate::enforcement::domain::ClassHeader;
use std::io::{self, Read};

/// Reads the fixed 8-byte class-file prefix from a byte stream.
///
/// Reads exactly 4 bytes of big-endian magic followed by the 2-byte minor
/// and 2-byte major versions. A stream shorter than 8 bytes yields an I/O
/// error, which the caller escalates.
pub fn read_class_header<R: Read + ?Sized>(reader: &mut R) -> io::Result<ClassHeader> {
    let mut word = [0u8; 4];
    reader.read_exact(&mut word)?;
    let magic = u32::from_be_bytes(word);

    let mut half = [0u8; 2];
    reader.read_exact(&mut half)?;
    let minor_version = u16::from_be_bytes(half);

    reader.read_exact(&mut half)?;
    let major_version = u16::from_be_bytes(half);

    Ok(ClassHeader::new(magic, minor_version, major_version))
}
