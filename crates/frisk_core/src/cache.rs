//! Per-file result caching.
//!
//! Scan results are cached by path so that repeated scans of unchanged
//! files return immediately. Entries are invalidated when the file's
//! modification time changes, when the entry outlives its TTL, or when
//! the file disappears from disk.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant, SystemTime};

use crate::finding::Finding;

/// Time-to-live for cached entries (5 minutes).
pub const CACHE_TTL: Duration = Duration::from_secs(300);

/// How often a background task should call [`ResultCache::sweep_expired`].
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(600);

/// Maximum number of cached files before eviction kicks in.
pub const MAX_ENTRIES: usize = 1000;

/// How many entries an eviction pass removes (the oldest fifth).
const EVICTION_BATCH: usize = MAX_ENTRIES / 5;

struct CacheEntry {
    findings: Arc<[Finding]>,
    mtime: SystemTime,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= CACHE_TTL
    }
}

/// Thread-safe cache of scan results keyed by file path.
///
/// Shared across scan workers via `Arc`; all methods take `&self`.
pub struct ResultCache {
    entries: Mutex<HashMap<Box<Path>, CacheEntry>>,
}

impl ResultCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached findings for `path` if the entry is still valid.
    ///
    /// An entry is valid when it has not outlived [`CACHE_TTL`] and the
    /// file's modification time matches the one recorded at insertion.
    /// Invalid entries, including entries for files that no longer exist,
    /// are purged before returning `None`.
    #[must_use]
    pub fn fresh(&self, path: &Path) -> Option<Arc<[Finding]>> {
        let mut entries = self.lock();
        let entry = entries.get(path)?;

        if entry.is_expired() {
            entries.remove(path);
            return None;
        }

        match std::fs::metadata(path).and_then(|m| m.modified()) {
            Ok(mtime) if mtime == entry.mtime => Some(Arc::clone(&entry.findings)),
            _ => {
                // Modified or gone from disk.
                entries.remove(path);
                None
            }
        }
    }

    /// Returns `true` when `path` has no valid cached entry.
    #[must_use]
    pub fn should_rescan(&self, path: &Path) -> bool {
        self.fresh(path).is_none()
    }

    /// Stores the findings for `path` along with the file's modification
    /// time at scan start, evicting the oldest entries when full.
    pub fn insert(&self, path: Box<Path>, findings: Vec<Finding>, mtime: SystemTime) {
        let mut entries = self.lock();

        if entries.len() >= MAX_ENTRIES && !entries.contains_key(&path) {
            evict_oldest(&mut entries);
        }

        entries.insert(
            path,
            CacheEntry {
                findings: findings.into(),
                mtime,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drops the entry for `path`, if present.
    pub fn invalidate(&self, path: &Path) {
        self.lock().remove(path);
    }

    /// Drops every entry that has outlived [`CACHE_TTL`].
    pub fn sweep_expired(&self) {
        self.lock().retain(|_, entry| !entry.is_expired());
    }

    /// Number of cached files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Box<Path>, CacheEntry>> {
        // A poisoned lock only means another worker panicked mid-update;
        // the map itself is still structurally sound.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache").field("entries", &self.len()).finish()
    }
}

fn evict_oldest(entries: &mut HashMap<Box<Path>, CacheEntry>) {
    let mut by_age: Vec<(Box<Path>, Instant)> = entries
        .iter()
        .map(|(path, entry)| (path.clone(), entry.inserted_at))
        .collect();
    by_age.sort_by_key(|&(_, inserted_at)| inserted_at);

    for (path, _) in by_age.into_iter().take(EVICTION_BATCH) {
        entries.remove(&path);
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::test_utils::make_finding;

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    fn mtime_of(path: &Path) -> SystemTime {
        std::fs::metadata(path)
            .and_then(|m| m.modified())
            .expect("read mtime")
    }

    #[test]
    fn fresh_returns_cached_findings() {
        let file = temp_file("token = \"abc\"\n");
        let path: Box<Path> = file.path().into();
        let cache = ResultCache::new();

        cache.insert(path.clone(), vec![make_finding("vcs/github-pat", "ghp_x")], mtime_of(&path));

        let findings = cache.fresh(&path).expect("entry should be fresh");
        assert_eq!(findings.len(), 1);
        assert!(!cache.should_rescan(&path));
    }

    #[test]
    fn missing_entry_requires_rescan() {
        let cache = ResultCache::new();
        assert!(cache.should_rescan(Path::new("/no/such/file")));
    }

    #[test]
    fn changed_mtime_purges_entry() {
        let file = temp_file("a\n");
        let path: Box<Path> = file.path().into();
        let cache = ResultCache::new();

        // Record an mtime that cannot match the file's real one.
        let stale = SystemTime::UNIX_EPOCH;
        cache.insert(path.clone(), Vec::new(), stale);

        assert!(cache.fresh(&path).is_none());
        assert!(cache.is_empty(), "stale entry should be purged");
    }

    #[test]
    fn deleted_file_purges_entry() {
        let file = temp_file("a\n");
        let path: Box<Path> = file.path().into();
        let cache = ResultCache::new();
        cache.insert(path.clone(), Vec::new(), mtime_of(&path));

        drop(file);

        assert!(cache.should_rescan(&path));
        assert!(cache.is_empty());
    }

    #[test]
    fn expired_entry_purges_on_access() {
        let file = temp_file("a\n");
        let path: Box<Path> = file.path().into();
        let cache = ResultCache::new();
        cache.insert(path.clone(), Vec::new(), mtime_of(&path));

        {
            let mut entries = cache.lock();
            let entry = entries.get_mut(&path).expect("entry exists");
            entry.inserted_at = Instant::now()
                .checked_sub(CACHE_TTL + Duration::from_secs(1))
                .expect("test duration subtraction should not underflow");
        }

        assert!(cache.fresh(&path).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn sweep_drops_only_expired_entries() {
        let cache = ResultCache::new();
        cache.insert(Path::new("/a").into(), Vec::new(), SystemTime::UNIX_EPOCH);
        cache.insert(Path::new("/b").into(), Vec::new(), SystemTime::UNIX_EPOCH);

        {
            let mut entries = cache.lock();
            let entry = entries.get_mut(Path::new("/a")).expect("entry exists");
            entry.inserted_at = Instant::now()
                .checked_sub(CACHE_TTL + Duration::from_secs(1))
                .expect("test duration subtraction should not underflow");
        }

        cache.sweep_expired();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache = ResultCache::new();
        cache.insert(Path::new("/a").into(), Vec::new(), SystemTime::UNIX_EPOCH);
        cache.invalidate(Path::new("/a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn eviction_removes_oldest_fifth_when_full() {
        let cache = ResultCache::new();
        for i in 0..MAX_ENTRIES {
            let path: Box<Path> = Path::new(&format!("/file-{i}")).into();
            cache.insert(path, Vec::new(), SystemTime::UNIX_EPOCH);
        }
        assert_eq!(cache.len(), MAX_ENTRIES);

        cache.insert(Path::new("/one-more").into(), Vec::new(), SystemTime::UNIX_EPOCH);

        assert_eq!(cache.len(), MAX_ENTRIES - MAX_ENTRIES / 5 + 1);
        assert!(cache.fresh(Path::new("/one-more")).is_none()); // file does not exist
    }

    #[test]
    fn reinserting_existing_path_does_not_evict() {
        let cache = ResultCache::new();
        for i in 0..MAX_ENTRIES {
            let path: Box<Path> = Path::new(&format!("/file-{i}")).into();
            cache.insert(path, Vec::new(), SystemTime::UNIX_EPOCH);
        }

        cache.insert(Path::new("/file-0").into(), Vec::new(), SystemTime::UNIX_EPOCH);
        assert_eq!(cache.len(), MAX_ENTRIES);
    }
}
