// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Timed file → checksum pipeline.

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use std::time::Instant;

use crate::{Digest, Error, Report, Table};

/// File read by the binaries, relative to the working directory.
pub const DEFAULT_INPUT: &str = "bigfile";

pub const BUF_SIZE: usize = 256 * 1024;

/// A streaming checksum that the pipeline can feed.
pub trait Accumulator {
    fn write(&mut self, bytes: &[u8]);

    fn finish(self) -> u64;
}

impl Accumulator for Digest<'_> {
    fn write(&mut self, bytes: &[u8]) {
        Digest::write(self, bytes);
    }

    fn finish(self) -> u64 {
        self.sum64()
    }
}

impl Accumulator for crc::Digest<'_, u64> {
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    fn finish(self) -> u64 {
        self.finalize()
    }
}

/// Streams `reader` to EOF through `acc`, returning the digest and the
/// number of bytes consumed.
pub fn checksum_reader<R: Read, A: Accumulator>(reader: R, mut acc: A) -> io::Result<(u64, u64)> {
    let mut reader = BufReader::with_capacity(BUF_SIZE, reader);
    let mut bytes = 0u64;

    loop {
        let length = match reader.fill_buf() {
            Ok([]) => break,
            Ok(buffer) => {
                acc.write(buffer);
                buffer.len()
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        reader.consume(length);
        bytes += length as u64;
    }

    Ok((acc.finish(), bytes))
}

/// Opens `path` and checksums it, timing open, read and hash together.
pub fn checksum_file<P: AsRef<Path>, A: Accumulator>(path: P, acc: A) -> Result<Report, Error> {
    let path = path.as_ref();

    let start = Instant::now();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "reading");

    let (digest, bytes) = checksum_reader(file, acc).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let elapsed = start.elapsed();

    Ok(Report {
        digest,
        elapsed,
        bytes,
    })
}

/// Builds the table, then runs [`checksum_file`] with a slicing [`Digest`].
///
/// `build_table` runs before the timer starts.
pub fn run<P: AsRef<Path>>(path: P, build_table: impl FnOnce() -> Table) -> Result<Report, Error> {
    let table = build_table();
    checksum_file(path, Digest::new(&table))
}
