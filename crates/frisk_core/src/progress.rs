//! Scan progress snapshots.
//!
//! Workers report each completed file to a shared tracker, which emits
//! read-only [`ScanProgress`] snapshots to an optional channel. Emission
//! happens under a lock so any subscriber observes percentages in
//! non-decreasing order even when workers finish out of order.

use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

/// A point-in-time view of a running scan.
#[derive(Debug, Clone)]
pub struct ScanProgress {
    /// Files completed so far, including cache hits and skipped files.
    pub scanned: usize,
    /// Total files the scan will visit.
    pub total: usize,
    /// Completion percentage in `0..=100`.
    pub percentage: u8,
    /// The file that just completed.
    pub current_file: Box<str>,
    /// Estimated time remaining, from the average per-file time so far.
    pub eta: Option<Duration>,
    /// When the scan started.
    pub started_at: Instant,
}

struct TrackerInner {
    scanned: usize,
    sender: Option<mpsc::UnboundedSender<ScanProgress>>,
}

/// Shared progress state for one scan.
pub struct ProgressTracker {
    total: usize,
    started_at: Instant,
    inner: Mutex<TrackerInner>,
}

impl ProgressTracker {
    /// Creates a tracker for `total` files, emitting snapshots to
    /// `sender` when one is given.
    #[must_use]
    pub fn new(total: usize, sender: Option<mpsc::UnboundedSender<ScanProgress>>) -> Self {
        Self {
            total,
            started_at: Instant::now(),
            inner: Mutex::new(TrackerInner { scanned: 0, sender }),
        }
    }

    /// Records the completion of one file and emits a snapshot.
    pub fn record_file(&self, path: &Path) -> ScanProgress {
        let mut inner = self.lock();
        inner.scanned += 1;

        let snapshot = self.snapshot_locked(inner.scanned, path);
        if let Some(sender) = &inner.sender {
            // A closed receiver just means nobody is watching anymore.
            let _ = sender.send(snapshot.clone());
        }
        snapshot
    }

    /// Files completed so far.
    #[must_use]
    pub fn scanned(&self) -> usize {
        self.lock().scanned
    }

    /// Total files the scan will visit.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    fn snapshot_locked(&self, scanned: usize, path: &Path) -> ScanProgress {
        ScanProgress {
            scanned,
            total: self.total,
            percentage: percentage(scanned, self.total),
            current_file: path.display().to_string().into(),
            eta: estimate_remaining(self.started_at.elapsed(), scanned, self.total),
            started_at: self.started_at,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TrackerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("scanned", &self.scanned())
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

fn percentage(scanned: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scanned is capped at total, so the value is always in 0..=100"
    )]
    let pct = (scanned.min(total) * 100 / total) as u8;
    pct
}

fn estimate_remaining(elapsed: Duration, scanned: usize, total: usize) -> Option<Duration> {
    if scanned == 0 || scanned >= total {
        return None;
    }
    let per_file = elapsed / u32::try_from(scanned).ok()?;
    let remaining = u32::try_from(total - scanned).ok()?;
    Some(per_file * remaining)
}
