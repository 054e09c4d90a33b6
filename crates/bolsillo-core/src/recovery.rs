//! Crash-recovery record of the hidden-window set.
//!
//! The record is a headerless sequence of 8-byte little-endian raw handle
//! values, rewritten after every hide/restore and deleted on clean
//! shutdown. If the daemon crashes, the file survives and the next start
//! re-hides whichever handles still refer to live windows.
//!
//! The persisted handle is only meaningful within the same boot session
//! and can in principle be recycled by an unrelated window between crash
//! and restart. Recovery validates liveness before trusting a handle but
//! cannot tell "same window" from "coincidentally reused identity" — this
//! is a best-effort heuristic, not a correctness guarantee.

use std::fs;
use std::path::PathBuf;

use crate::WindowResult;
use crate::paths;

const RECOVERY_FILE: &str = "recovery.dat";

/// Width of one record: a raw handle stored as a 64-bit value.
const RECORD_SIZE: usize = 8;

/// Returns the path of the recovery record.
pub fn recovery_path() -> WindowResult<PathBuf> {
    Ok(paths::data_dir()?.join(RECOVERY_FILE))
}

/// Encodes handles into the on-disk record format.
pub fn encode(handles: &[u64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(handles.len() * RECORD_SIZE);
    for handle in handles {
        bytes.extend_from_slice(&handle.to_le_bytes());
    }
    bytes
}

/// Decodes a record back into handle values.
///
/// A trailing partial record (truncated write, e.g. a crash mid-save) is
/// ignored; the complete records before it are still returned.
pub fn decode(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| {
            let mut record = [0u8; RECORD_SIZE];
            record.copy_from_slice(chunk);
            u64::from_le_bytes(record)
        })
        .collect()
}

/// Overwrites the record with the current hidden-window handles.
pub fn save(handles: &[u64]) -> WindowResult<()> {
    let path = recovery_path()?;
    fs::write(&path, encode(handles))?;
    Ok(())
}

/// Reads whatever record is present. Absent or unreadable files yield an
/// empty list — there is simply nothing to recover.
pub fn load() -> Vec<u64> {
    let Ok(path) = recovery_path() else {
        return Vec::new();
    };
    match fs::read(&path) {
        Ok(bytes) => decode(&bytes),
        Err(_) => Vec::new(),
    }
}

/// Deletes the record. Called on clean shutdown; best-effort.
pub fn clear() {
    if let Ok(path) = recovery_path() {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips() {
        // Arrange
        let handles = vec![0x1234_5678_9ABC_DEF0, 0x42, 0];

        // Act
        let decoded = decode(&encode(&handles));

        // Assert
        assert_eq!(decoded, handles);
    }

    #[test]
    fn truncated_record_yields_fewer_entries() {
        // Arrange: two full records plus 3 stray bytes.
        let mut bytes = encode(&[0xAA, 0xBB]);
        bytes.extend_from_slice(&[1, 2, 3]);

        // Act
        let decoded = decode(&bytes);

        // Assert: the partial trailing record is dropped silently.
        assert_eq!(decoded, vec![0xAA, 0xBB]);
    }

    #[test]
    fn empty_record_decodes_to_nothing() {
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn records_are_fixed_width_little_endian() {
        let bytes = encode(&[0x0102_0304_0506_0708]);

        assert_eq!(bytes.len(), 8);
        assert_eq!(bytes, vec![0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }
}
