// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

use std::time::Duration;

/// Outcome of one timed checksum run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub digest: u64,
    /// Wall-clock time of open + read + hash. Table construction is excluded.
    pub elapsed: Duration,
    pub bytes: u64,
}

impl Report {
    /// 16 uppercase hex digits, zero-padded, no `0x`.
    pub fn hex_digest(&self) -> String {
        format!("{:016X}", self.digest)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// `1 / elapsed_seconds`, whatever the file size.
    ///
    /// This is only real GB/s for a 1 GB input; see
    /// [`Report::actual_gigabytes_per_second`] for the measured figure.
    pub fn gigabytes_per_second(&self) -> f64 {
        1.0 / self.elapsed.as_secs_f64()
    }

    /// Bytes consumed per second, in units of 10^9.
    pub fn actual_gigabytes_per_second(&self) -> f64 {
        self.bytes as f64 / self.elapsed.as_secs_f64() / 1e9
    }

    /// Emits the three result lines at info level, plus the measured
    /// throughput at debug level.
    pub fn log(&self) {
        tracing::info!("hex digest: {}", self.hex_digest());
        tracing::info!("time elapsed: {:.2}ms", self.elapsed_ms());
        tracing::info!("GB/s: {:.2}", self.gigabytes_per_second());
        tracing::debug!(
            bytes = self.bytes,
            "actual GB/s: {:.2}",
            self.actual_gigabytes_per_second()
        );
    }
}
