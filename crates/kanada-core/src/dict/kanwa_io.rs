use std::collections::BTreeMap;
use std::io::{Read, Seek, SeekFrom, Write};

use super::{DictEntry, DictError, DictKey};

// File layout (all integers little-endian):
//
//   [index]  INDEX_SLOTS × i32   offset of the key's block, 0 = no entries
//   [data]   per key: u32 block length + bincode Vec<DictEntry>
//
// Offsets are absolute and always point past the index section.

pub const FIRST_CODEPOINT: u32 = 0x4E00;
pub const LAST_CODEPOINT: u32 = 0x9FFF;
pub const INDEX_SLOTS: usize = (LAST_CODEPOINT - FIRST_CODEPOINT + 1) as usize;
pub(super) const SLOT_SIZE: usize = 4;
pub const INDEX_SIZE: usize = INDEX_SLOTS * SLOT_SIZE;
const BLOCK_HEADER_SIZE: u64 = 4;

/// Read and validate the index section.
pub(super) fn read_index<R: Read>(reader: &mut R, file_len: u64) -> Result<Box<[u32]>, DictError> {
    if file_len < INDEX_SIZE as u64 {
        return Err(DictError::InvalidIndex(format!(
            "file is {file_len} bytes, index needs {INDEX_SIZE}"
        )));
    }

    let mut buf = vec![0u8; INDEX_SIZE];
    reader.read_exact(&mut buf)?;

    let mut index = Vec::with_capacity(INDEX_SLOTS);
    for (slot, raw) in buf.chunks_exact(SLOT_SIZE).enumerate() {
        let offset = i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
        let in_data = u64::try_from(offset)
            .is_ok_and(|off| off >= INDEX_SIZE as u64 && off < file_len);
        if offset != 0 && !in_data {
            return Err(DictError::InvalidIndex(format!(
                "slot {slot} has offset {offset} outside the data section"
            )));
        }
        index.push(offset as u32);
    }
    Ok(index.into_boxed_slice())
}

/// Read one key's entry block starting at `offset`.
pub(super) fn read_block<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    file_len: u64,
) -> Result<Vec<DictEntry>, DictError> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;
    let len = u64::from(u32::from_le_bytes(len_buf));
    if offset + BLOCK_HEADER_SIZE + len > file_len {
        return Err(DictError::InvalidBlock { offset });
    }

    let mut body = vec![0u8; len as usize];
    reader.read_exact(&mut body)?;
    bincode::deserialize(&body).map_err(DictError::Deserialize)
}

/// Write the whole file: a zeroed index placeholder, every key's block in key
/// order, then the index rewritten in place with the recorded offsets.
pub(super) fn write_dictionary<W: Write + Seek>(
    writer: &mut W,
    entries: &BTreeMap<DictKey, Vec<DictEntry>>,
) -> Result<(), DictError> {
    let mut index = vec![0i32; INDEX_SLOTS];
    writer.seek(SeekFrom::Start(0))?;
    writer.write_all(&vec![0u8; INDEX_SIZE])?;

    for (key, list) in entries {
        let Some(slot) = key.slot() else {
            return Err(DictError::Parse(format!(
                "key U+{:04X} is outside the indexed range",
                key.codepoint() as u32
            )));
        };
        let pos = writer.stream_position()?;
        index[slot] = i32::try_from(pos)
            .map_err(|_| DictError::Parse("dictionary exceeds i32::MAX bytes".to_string()))?;

        let body = bincode::serialize(list).map_err(DictError::Serialize)?;
        let len: u32 = body
            .len()
            .try_into()
            .map_err(|_| DictError::Parse("entry block exceeds u32::MAX".to_string()))?;
        writer.write_all(&len.to_le_bytes())?;
        writer.write_all(&body)?;
    }

    let mut buf = Vec::with_capacity(INDEX_SIZE);
    for offset in &index {
        buf.extend_from_slice(&offset.to_le_bytes());
    }
    writer.seek(SeekFrom::Start(0))?;
    writer.write_all(&buf)?;
    writer.flush()?;
    Ok(())
}
