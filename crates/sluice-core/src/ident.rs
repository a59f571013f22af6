//! Identifier generation for split rows and finalized programs.
//!
//! The provider is an injectable capability: production code uses
//! [`EntropyIdProvider`], tests and reproducible demo runs inject
//! [`SequenceIdProvider`]. Generation never fails — when the OS entropy
//! source is unavailable the provider falls back to a timestamp-plus-random
//! composite instead of surfacing an error.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::OsRng;
use rand::RngCore;

/// Source of identifiers unique across the process's lifetime.
pub trait IdProvider: Send + Sync {
    /// Produce the next identifier. Always returns a usable value.
    fn next_id(&self) -> String;
}

impl<T: IdProvider + ?Sized> IdProvider for Box<T> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

/// Default provider: 16 bytes of OS entropy formatted as a version-4 UUID,
/// with a fallback of base-36 Unix-millisecond timestamp plus a random hex
/// suffix when the entropy source cannot be read.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropyIdProvider;

impl IdProvider for EntropyIdProvider {
    fn next_id(&self) -> String {
        let mut bytes = [0u8; 16];
        match OsRng.try_fill_bytes(&mut bytes) {
            Ok(()) => format_uuid_v4(bytes),
            Err(_) => fallback_id(),
        }
    }
}

/// Format 16 random bytes as an RFC 4122 version-4 UUID string.
fn format_uuid_v4(mut bytes: [u8; 16]) -> String {
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // variant 10xx

    let mut out = String::with_capacity(36);
    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Fallback composite: millisecond timestamp in base-36, then 64 random
/// bits from the thread-local generator, which cannot fail.
fn fallback_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let suffix: u64 = rand::random();
    format!("{}-{suffix:016x}", base36(millis))
}

/// Lowercase base-36 encoding of an unsigned integer.
fn base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = [0u8; 13]; // u64::MAX is 13 base-36 digits
    let mut pos = buf.len();
    while value > 0 {
        pos -= 1;
        buf[pos] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&buf[pos..]).into_owned()
}

/// Deterministic provider: `id-0`, `id-1`, ... in call order.
#[derive(Debug, Default)]
pub struct SequenceIdProvider {
    next: AtomicU64,
}

impl SequenceIdProvider {
    /// Create a provider starting at `id-0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider starting at `id-{start}`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdProvider for SequenceIdProvider {
    fn next_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}
