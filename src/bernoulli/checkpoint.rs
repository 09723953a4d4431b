//! Resumable state file format and atomic publish protocol (C5).
//!
//! Header (little-endian, packed): `magic: u32`, `loop: u64`, `inx: u32`
//! (= produced), `loop1: u32` (= outer), `loop2: u32` (= inner). Body:
//! `loop1` working numerators, `loop1` working denominators, `inx` output
//! numerators, `inx` output denominators — each a [`BigInt`] record per
//! `bigint::io`. Trailer: `u32` CRC-32, the complement of the running
//! value folded over the header and every record, in write order.

use super::BernState;
use crate::bigint::io::read_full;
use crate::bigint::BigInt;
use crate::crc;
use crate::error::{BigIntError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

const MAGIC: u32 = 0xBEFE_ED64;
const HEADER_BYTES: usize = 4 + 8 + 4 + 4 + 4;

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

impl BernState {
    /// Atomically publish the current state to `path`: write it in full to
    /// a temporary sibling file, remove any existing file at `path`
    /// (ignoring "not found"), then rename the temporary file into place.
    pub fn save_file(&self, path: &Path) -> Result<()> {
        let temp = temp_path_for(path);
        {
            let file = File::create(&temp)?;
            let mut writer = BufWriter::new(file);
            self.write_to(&mut writer)?;
            writer.flush()?;
        }
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        fs::rename(&temp, path).map_err(BigIntError::IoRename)?;
        Ok(())
    }

    /// Try to load state from `path`, falling back to its temporary
    /// sibling (a publish that was interrupted after the write but before
    /// the rename). Returns `Ok(false)` if neither file exists — the
    /// caller should then build a fresh state via [`BernState::new`].
    pub fn load_file(&mut self, path: &Path) -> Result<bool> {
        let temp = temp_path_for(path);
        let chosen: &Path = if path.exists() {
            path
        } else if temp.exists() {
            &temp
        } else {
            return Ok(false);
        };
        let file = File::open(chosen)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)?;
        Ok(true)
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut header = [0u8; HEADER_BYTES];
        {
            let mut cursor = &mut header[..];
            cursor.write_u32::<LittleEndian>(MAGIC)?;
            cursor.write_u64::<LittleEndian>(self.loop_count)?;
            cursor.write_u32::<LittleEndian>(self.produced as u32)?;
            cursor.write_u32::<LittleEndian>(self.outer as u32)?;
            cursor.write_u32::<LittleEndian>(self.inner as u32)?;
        }
        writer.write_all(&header)?;
        let mut running = crc::crc_buf(0, &header);

        for v in &self.num[..self.outer] {
            running = v.save(writer, running)?;
        }
        for v in &self.den[..self.outer] {
            running = v.save(writer, running)?;
        }
        for v in &self.out_num[..self.produced] {
            running = v.save(writer, running)?;
        }
        for v in &self.out_den[..self.produced] {
            running = v.save(writer, running)?;
        }

        writer.write_u32::<LittleEndian>(!running)?;
        Ok(())
    }

    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        let mut header = [0u8; HEADER_BYTES];
        read_full(reader, &mut header, "checkpoint header")?;
        let mut cursor = &header[..];
        let magic = cursor.read_u32::<LittleEndian>()?;
        if magic != MAGIC {
            return Err(BigIntError::CheckpointFormat {
                reason: format!("bad magic: expected {MAGIC:#010x}, got {magic:#010x}"),
            });
        }
        let loop_count = cursor.read_u64::<LittleEndian>()?;
        let inx = cursor.read_u32::<LittleEndian>()? as usize;
        let loop1 = cursor.read_u32::<LittleEndian>()? as usize;
        let loop2 = cursor.read_u32::<LittleEndian>()? as usize;

        if inx > self.n {
            return Err(BigIntError::CheckpointFormat {
                reason: format!("produced count {inx} exceeds target n={n}", n = self.n),
            });
        }
        if loop1 > 2 * self.n + 1 {
            return Err(BigIntError::CheckpointFormat {
                reason: format!("outer index {loop1} exceeds 2n+1={bound}", bound = 2 * self.n + 1),
            });
        }

        let mut running = crc::crc_buf(0, &header);

        let mut working_num = Vec::with_capacity(loop1);
        for _ in 0..loop1 {
            let (value, next) = BigInt::load(reader, running)?;
            running = next;
            working_num.push(value);
        }
        let mut working_den = Vec::with_capacity(loop1);
        for _ in 0..loop1 {
            let (value, next) = BigInt::load(reader, running)?;
            running = next;
            working_den.push(value);
        }
        let mut out_num = Vec::with_capacity(inx);
        for _ in 0..inx {
            let (value, next) = BigInt::load(reader, running)?;
            running = next;
            out_num.push(value);
        }
        let mut out_den = Vec::with_capacity(inx);
        for _ in 0..inx {
            let (value, next) = BigInt::load(reader, running)?;
            running = next;
            out_den.push(value);
        }

        let mut trailer_buf = [0u8; 4];
        read_full(reader, &mut trailer_buf, "checkpoint trailer")?;
        let trailer = u32::from_le_bytes(trailer_buf);
        if trailer != !running {
            return Err(BigIntError::CheckpointFormat {
                reason: "CRC mismatch".to_string(),
            });
        }

        self.num[..loop1].clone_from_slice(&working_num);
        self.den[..loop1].clone_from_slice(&working_den);
        self.out_num[..inx].clone_from_slice(&out_num);
        self.out_den[..inx].clone_from_slice(&out_den);
        self.loop_count = loop_count;
        self.produced = inx;
        self.outer = loop1;
        self.inner = loop2;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_a_fresh_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Bernoulli.bin");

        let mut state = BernState::new(4);
        state.save_file(&path).unwrap();

        let mut loaded = BernState::new(4);
        assert!(loaded.load_file(&path).unwrap());
        assert_eq!(loaded.loop_count(), state.loop_count());
        assert_eq!(loaded.produced(), state.produced());
    }

    #[test]
    fn round_trips_a_partially_advanced_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Bernoulli.bin");

        let mut state = BernState::new(4);
        while state.produced() < 2 {
            state.step();
        }
        state.save_file(&path).unwrap();

        let mut loaded = BernState::new(4);
        assert!(loaded.load_file(&path).unwrap());
        loaded.run(|_, _| {});

        let mut reference = BernState::new(4);
        reference.run(|_, _| {});

        let loaded_results: Vec<_> = loaded.results().map(|(n, d)| (n.clone(), d.clone())).collect();
        let reference_results: Vec<_> = reference
            .results()
            .map(|(n, d)| (n.clone(), d.clone()))
            .collect();
        assert_eq!(loaded_results, reference_results);
    }

    #[test]
    fn missing_files_load_as_false() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.bin");
        let mut state = BernState::new(2);
        assert!(!state.load_file(&path).unwrap());
    }

    #[test]
    fn falls_back_to_temporary_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Bernoulli.bin");
        let temp = temp_path_for(&path);

        let state = BernState::new(3);
        let file = File::create(&temp).unwrap();
        let mut writer = BufWriter::new(file);
        state.write_to(&mut writer).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let mut loaded = BernState::new(3);
        assert!(loaded.load_file(&path).unwrap());
    }

    #[test]
    fn corrupted_magic_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Bernoulli.bin");
        let state = BernState::new(2);
        state.save_file(&path).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes[0] ^= 0xff;
        fs::write(&path, &bytes).unwrap();

        let mut loaded = BernState::new(2);
        let err = loaded.load_file(&path).unwrap_err();
        assert!(matches!(err, BigIntError::CheckpointFormat { .. }));
    }

    #[test]
    fn corrupted_payload_fails_crc_check() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Bernoulli.bin");
        let mut state = BernState::new(3);
        while state.produced() < 1 {
            state.step();
        }
        state.save_file(&path).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        let last = bytes.len() - 5;
        bytes[last] ^= 0xff;
        fs::write(&path, &bytes).unwrap();

        let mut loaded = BernState::new(3);
        let err = loaded.load_file(&path).unwrap_err();
        assert!(matches!(err, BigIntError::CheckpointFormat { .. }));
    }
}
