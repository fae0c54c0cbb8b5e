// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! `crc64stream`
//! ===========
//!
//! Streaming table-driven CRC-64 over the polynomial `0x9A6C9329AC4BC9B5`
//! (reflected form), with a timed file pipeline around it.
//!
//! ## Usage
//!
//! ```
//! use crc64stream::{Digest, Table, POLY};
//!
//! let table = Table::new(POLY);
//! let mut c = Digest::new(&table);
//! c.write(b"hello ");
//! c.write(b"world!");
//! let checksum = c.sum64();
//! assert_eq!(checksum, 0xd9160d1fa8e418e3);
//! ```

mod error;
pub mod logging;
mod pipeline;
mod report;
pub mod table;

pub use error::Error;
pub use pipeline::{checksum_file, checksum_reader, run, Accumulator, BUF_SIZE, DEFAULT_INPUT};
pub use report::Report;
pub use table::Table;

/// The CRC-64 polynomial, in reflected (LSB-first) form.
///
/// Its MSB-first form is `0xAD93D23594C93659`, the CRC-64/NVME polynomial.
pub const POLY: u64 = 0x9A6C9329AC4BC9B5;

type UpdateFn = fn(&Table, u64, &[u8]) -> u64;

/// Represents an in-progress CRC-64 computation.
#[derive(Clone)]
pub struct Digest<'a> {
    table: &'a Table,
    computer: UpdateFn,
    state: u64,
}

impl<'a> Digest<'a> {
    /// Creates a new `Digest` that consumes 8 bytes per table step.
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            computer: table::update_sliced,
            state: !0,
        }
    }

    /// Creates a new `Digest` using the byte-at-a-time loop.
    pub fn new_bytewise(table: &'a Table) -> Self {
        Self {
            table,
            computer: table::update_bytewise,
            state: !0,
        }
    }

    /// Writes some data into the digest.
    pub fn write(&mut self, bytes: &[u8]) {
        self.state = (self.computer)(self.table, self.state, bytes);
    }

    /// Computes the current CRC-64 value.
    pub fn sum64(&self) -> u64 {
        !self.state
    }
}

impl std::fmt::Debug for Digest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digest")
            .field("table", self.table)
            .field("sum64", &format_args!("{:#018x}", self.sum64()))
            .finish()
    }
}
