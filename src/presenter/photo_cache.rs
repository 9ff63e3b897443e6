use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use lru::LruCache;
use ratatui_image::protocol::StatefulProtocol;

pub(crate) const DEFAULT_PHOTO_CACHE_ENTRIES: usize = 24;

pub(crate) enum PhotoSlot {
    Loading,
    Ready(Box<StatefulProtocol>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CacheCounters {
    hits: u64,
    misses: u64,
}

/// Decoded photos keyed by their resolved path, least recently drawn first
/// out.
pub(crate) struct PhotoCache {
    max_entries: usize,
    entries: LruCache<PathBuf, PhotoSlot>,
    counters: CacheCounters,
}

impl Default for PhotoCache {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_CACHE_ENTRIES)
    }
}

impl PhotoCache {
    pub(crate) fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            max_entries,
            entries: LruCache::new(NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN)),
            counters: CacheCounters::default(),
        }
    }

    pub(crate) fn lookup_mut(&mut self, path: &Path) -> Option<&mut PhotoSlot> {
        if self.entries.peek(path).is_some() {
            self.counters.hits += 1;
            return self.entries.get_mut(path);
        }

        self.counters.misses += 1;
        None
    }

    /// Replaces the slot of a photo that is still cached. Photos evicted while
    /// loading are dropped so they do not push out newer entries.
    pub(crate) fn settle(&mut self, path: &Path, slot: PhotoSlot) -> bool {
        match self.entries.peek_mut(path) {
            Some(entry) => {
                *entry = slot;
                true
            }
            None => false,
        }
    }

    pub(crate) fn mark_loading(&mut self, path: PathBuf) {
        self.entries.put(path, PhotoSlot::Loading);
    }

    pub(crate) fn hit_rate(&self) -> f64 {
        let lookups = self.counters.hits + self.counters.misses;
        if lookups == 0 {
            return 0.0;
        }
        self.counters.hits as f64 / lookups as f64
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub(crate) fn has_pending_work(&self) -> bool {
        self.entries
            .iter()
            .any(|(_path, slot)| matches!(slot, PhotoSlot::Loading))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
