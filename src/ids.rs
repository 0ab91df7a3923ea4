//! Timestamp-based id generation.
//!
//! Ids follow the `<prefix>-<millis>` convention of the workflow file format.
//! The generator never reuses a timestamp: when the clock has not advanced
//! since the last id, the previous timestamp is bumped by one.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of millisecond timestamps.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A clock that always reports the same instant. Useful for deterministic ids.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

pub struct IdGenerator {
    clock: Arc<dyn Clock>,
    last: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last", &self.last)
            .finish()
    }
}

impl IdGenerator {
    /// Generators sharing a clock may hand out the same stamp under
    /// different prefixes.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, last: None }
    }

    /// Returns a timestamp strictly greater than any previously returned one.
    pub fn next_stamp(&mut self) -> u64 {
        let now = self.clock.now_millis();
        let stamp = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(stamp);
        stamp
    }

    /// `<prefix>-<millis>`
    pub fn next(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_stamp())
    }

    /// `<prefix>-<millis>-<index>` for every index in `0..count`, sharing one stamp.
    pub fn next_batch(&mut self, prefix: &str, count: usize) -> Vec<String> {
        let stamp = self.next_stamp();
        (0..count)
            .map(|index| format!("{}-{}-{}", prefix, stamp, index))
            .collect()
    }
}
