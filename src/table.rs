// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Table-based CRC-64 computation.
//!
//! The first table is the classic 256-entry byte table. The remaining seven
//! hold the contribution of a byte 1..=7 positions further back, which lets
//! [`update_sliced`] consume 8 bytes per step ("slicing-by-8").

/// Number of lookup tables kept by a [`Table`].
pub const SLICES: usize = 8;

/// Precomputed lookup tables for one reflected CRC-64 polynomial.
#[derive(Clone)]
pub struct Table {
    poly: u64,
    tables: Box<[[u64; 256]; SLICES]>,
}

impl Table {
    /// Builds the tables for `poly`, given in reflected (LSB-first) form.
    pub fn new(poly: u64) -> Self {
        let mut tables = Box::new([[0u64; 256]; SLICES]);

        for (i, entry) in tables[0].iter_mut().enumerate() {
            let mut crc = i as u64;
            for _ in 0..8 {
                crc = crc >> 1 ^ if crc & 1 != 0 { poly } else { 0 };
            }
            *entry = crc;
        }

        for k in 1..SLICES {
            for i in 0..256 {
                let prev = tables[k - 1][i];
                tables[k][i] = tables[0][(prev & 0xff) as usize] ^ (prev >> 8);
            }
        }

        Self { poly, tables }
    }

    /// The reflected polynomial these tables were built from.
    pub fn poly(&self) -> u64 {
        self.poly
    }

    /// Entry `index` of slicing table `table_id` (0 is the byte table).
    ///
    /// # Panics
    ///
    /// Panics if `table_id >= SLICES`.
    pub fn entry(&self, table_id: usize, index: u8) -> u64 {
        self.tables[table_id][index as usize]
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("poly", &format_args!("{:#018x}", self.poly))
            .finish_non_exhaustive()
    }
}

/// Advances the raw register one byte at a time.
pub fn update_bytewise(table: &Table, mut reg: u64, bytes: &[u8]) -> u64 {
    let t0 = &table.tables[0];
    for &b in bytes {
        reg = t0[((reg ^ u64::from(b)) & 0xff) as usize] ^ (reg >> 8);
    }
    reg
}

/// Advances the raw register 8 bytes at a time, finishing the tail bytewise.
pub fn update_sliced(table: &Table, mut reg: u64, bytes: &[u8]) -> u64 {
    let t = &table.tables;
    let chunks = bytes.chunks_exact(8);
    let tail = chunks.remainder();

    for chunk in chunks {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        let val = u64::from_le_bytes(word) ^ reg;

        reg = t[7][(val & 0xff) as usize]
            ^ t[6][((val >> 8) & 0xff) as usize]
            ^ t[5][((val >> 16) & 0xff) as usize]
            ^ t[4][((val >> 24) & 0xff) as usize]
            ^ t[3][((val >> 32) & 0xff) as usize]
            ^ t[2][((val >> 40) & 0xff) as usize]
            ^ t[1][((val >> 48) & 0xff) as usize]
            ^ t[0][(val >> 56) as usize];
    }

    update_bytewise(table, reg, tail)
}
