use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, info, warn};

use super::kanwa_io::{read_block, read_index, FIRST_CODEPOINT};
use super::source::KanwaBuilder;
use super::{DictEntry, DictError, DictKey, Dictionary};

/// Paged reading dictionary backed by a kanwa binary file.
///
/// Only the index is read at open. Each key's entry list is read from disk
/// on its first `search_key` and kept in memory afterwards; the file is read
/// at most once per key for the lifetime of the dictionary.
pub struct KanwaDictionary {
    path: PathBuf,
    file: Mutex<File>,
    file_len: u64,
    index: Box<[u32]>,
    cache: RwLock<HashMap<DictKey, Arc<[DictEntry]>>>,
    disk_reads: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictStats {
    /// Keys with a non-zero index slot.
    pub indexed_keys: usize,
    /// Keys paged in so far.
    pub cached_keys: usize,
    /// Entry blocks physically read from the file.
    pub disk_reads: usize,
}

impl KanwaDictionary {
    /// Open a pre-built dictionary file, reading only its index section.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        let file_len = file.metadata()?.len();
        let index = read_index(&mut BufReader::new(&file), file_len)?;
        let dict = Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
            file_len,
            index,
            cache: RwLock::new(HashMap::new()),
            disk_reads: AtomicUsize::new(0),
        };
        info!(
            path = %path.display(),
            keys = dict.indexed_keys(),
            bytes = file_len,
            "kanwa dictionary opened"
        );
        Ok(dict)
    }

    /// Open `path` if it exists, otherwise build it from `sources` first.
    ///
    /// Missing source files are skipped. A failed build may leave a partial
    /// file behind; callers should treat the dictionary as unavailable.
    pub fn open_or_build(path: &Path, sources: &[PathBuf]) -> Result<Self, DictError> {
        if path.exists() {
            return Self::open(path);
        }

        let mut builder = KanwaBuilder::new();
        let mut loaded = 0usize;
        for source in sources {
            match builder.add_source_file(source) {
                Ok(()) => loaded += 1,
                Err(DictError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                    warn!(source = %source.display(), "source dictionary not found, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        if loaded == 0 {
            return Err(DictError::NoSource);
        }

        builder.write(path)?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn offset(&self, key: DictKey) -> u32 {
        key.slot().map_or(0, |slot| self.index[slot])
    }

    fn indexed_keys(&self) -> usize {
        self.index.iter().filter(|&&off| off != 0).count()
    }

    fn cached(&self, key: DictKey) -> Option<Arc<[DictEntry]>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Every indexed key with its entries, in codepoint order.
    ///
    /// Keys are paged in as the iterator advances. A key whose block is
    /// corrupt is skipped, the same as a miss in `search_key`.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = Result<(DictKey, Arc<[DictEntry]>), DictError>> + '_ {
        self.index
            .iter()
            .enumerate()
            .filter(|&(_, &off)| off != 0)
            .filter_map(|(slot, _)| char::from_u32(FIRST_CODEPOINT + slot as u32))
            .filter_map(move |c| {
                let key = DictKey::new(c);
                match self.search_key(key) {
                    Ok(true) => Some(Ok((key, self.get_value(key)))),
                    Ok(false) => None,
                    Err(e) => Some(Err(e)),
                }
            })
    }

    pub fn disk_reads(&self) -> usize {
        self.disk_reads.load(Ordering::Relaxed)
    }

    pub fn stats(&self) -> DictStats {
        DictStats {
            indexed_keys: self.indexed_keys(),
            cached_keys: self
                .cache
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
            disk_reads: self.disk_reads(),
        }
    }
}

impl Dictionary for KanwaDictionary {
    fn search_key(&self, key: DictKey) -> Result<bool, DictError> {
        let offset = self.offset(key);
        if offset == 0 {
            return Ok(false);
        }
        if let Some(entries) = self.cached(key) {
            return Ok(!entries.is_empty());
        }

        // Holding the file lock across check-read-insert serializes first
        // lookups, so a key racing with itself is still read only once.
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entries) = self.cached(key) {
            return Ok(!entries.is_empty());
        }

        self.disk_reads.fetch_add(1, Ordering::Relaxed);
        let entries: Arc<[DictEntry]> = match read_block(&mut *file, offset.into(), self.file_len) {
            Ok(list) => list.into(),
            Err(e) if e.is_corruption() => {
                warn!(
                    key = %key.codepoint(),
                    offset,
                    error = %e,
                    "corrupt entry block, treating key as missing"
                );
                Arc::from(Vec::new())
            }
            Err(e) => return Err(e),
        };
        debug!(key = %key.codepoint(), count = entries.len(), "paged in entry list");

        let found = !entries.is_empty();
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, entries);
        Ok(found)
    }

    fn get_value(&self, key: DictKey) -> Arc<[DictEntry]> {
        self.cached(key).unwrap_or_else(|| Arc::from(Vec::new()))
    }
}
