//! Simulator: replays a trace against the snooping bus.
//!
//! Records are applied strictly in trace order; each one runs to completion,
//! including all of its snoops, before the next starts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::trace::{TraceReader, TraceRecord};
use crate::common::{ConfigError, SimError, TraceError, TraceErrorKind};
use crate::config::Config;
use crate::soc::Bus;
use crate::stats::Report;

/// Top-level simulator: the bus and its caches.
#[derive(Debug)]
pub struct Simulator {
    /// The shared bus (and through it, every cache).
    pub bus: Bus,
    records: u64,
}

impl Simulator {
    /// Builds the bus described by `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] of [`Bus::new`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            bus: Bus::new(config)?,
            records: 0,
        })
    }

    /// Applies one record.
    ///
    /// # Errors
    ///
    /// Returns [`TraceErrorKind::CoreOutOfRange`] (tagged with `line`) if the
    /// record names a core the bus does not have.
    pub fn step(&mut self, record: &TraceRecord, line: usize) -> Result<(), TraceError> {
        let cores = self.bus.len();
        if record.core >= cores {
            return Err(TraceError {
                line,
                kind: TraceErrorKind::CoreOutOfRange {
                    core: record.core,
                    cores,
                },
            });
        }
        self.bus.access(record.core, record.addr, record.op);
        self.records += 1;
        Ok(())
    }

    /// Replays every record of `reader`, stopping at the first error.
    ///
    /// # Returns
    ///
    /// The number of records applied by this call.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or trace error encountered.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> Result<u64, SimError> {
        let start = self.records;
        let mut records = TraceReader::new(reader);
        while let Some(record) = records.next() {
            let record = record?;
            self.step(&record, records.line())?;
        }
        debug!(records = self.records - start, "trace replayed");
        Ok(self.records - start)
    }

    /// Replays the trace file at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Simulator::run_reader`], plus failure to open the file.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<u64, SimError> {
        let file = File::open(path)?;
        self.run_reader(BufReader::new(file))
    }

    /// Total records applied so far.
    pub const fn records(&self) -> u64 {
        self.records
    }

    /// Snapshot of every cache, in core order.
    pub fn reports(&self) -> Vec<Report> {
        self.bus.reports()
    }
}
