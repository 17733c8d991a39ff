//! Curated content store
//!
//! An in-memory index of topic name to ordered question list, loaded once at
//! startup from a directory of JSON topic files. The index is immutable
//! during normal operation; `reload` builds a replacement and swaps it
//! atomically, so readers observe either the old or the new index, never a
//! partially-populated one.

use super::defaults::builtin_questions;
use super::types::RawQuestion;
use crate::utils::error::Result;
use arc_swap::ArcSwap;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A topic file is either a bare question array or a wrapped object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TopicFile {
    Bare(Vec<RawQuestion>),
    Wrapped { questions: Vec<RawQuestion> },
}

/// Insertion-ordered topic index
///
/// Topics keep dataset load order (sorted file names), so partial-match
/// resolution is deterministic.
#[derive(Debug, Default)]
pub struct TopicIndex {
    topics: Vec<(String, Arc<Vec<RawQuestion>>)>,
    by_name: HashMap<String, usize>,
}

impl TopicIndex {
    fn insert(&mut self, name: String, questions: Vec<RawQuestion>) {
        if self.by_name.contains_key(&name) {
            warn!("duplicate curated topic {}, keeping the first", name);
            return;
        }
        self.by_name.insert(name.clone(), self.topics.len());
        self.topics.push((name, Arc::new(questions)));
    }

    /// Look up a topic by exact name
    pub fn exact(&self, topic: &str) -> Option<Arc<Vec<RawQuestion>>> {
        self.by_name
            .get(topic)
            .map(|&slot| Arc::clone(&self.topics[slot].1))
    }

    /// Look up a topic by substring containment in either direction
    ///
    /// The first match in insertion order wins. Short names can match
    /// unintended topics ("c" matches "css"); callers accept that in exchange
    /// for forgiving topic resolution.
    pub fn partial(&self, topic: &str) -> Option<Arc<Vec<RawQuestion>>> {
        self.topics
            .iter()
            .find(|(name, _)| topic.contains(name.as_str()) || name.contains(topic))
            .map(|(_, questions)| Arc::clone(questions))
    }

    /// Topic names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.topics.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Number of indexed topics
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the index holds no topics
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Curated question bank with atomic reload
pub struct CuratedBank {
    dataset_dir: Option<PathBuf>,
    defaults: Arc<Vec<RawQuestion>>,
    index: ArcSwap<TopicIndex>,
}

impl CuratedBank {
    /// Load the bank from a dataset directory with the built-in default pool
    ///
    /// `None` runs on the defaults alone. A missing or unreadable directory
    /// degrades to an empty index with a warning; individual malformed files
    /// are skipped.
    pub async fn load(dataset_dir: Option<PathBuf>) -> Result<Self> {
        let bank = Self::with_defaults(dataset_dir, builtin_questions());
        bank.reload().await?;
        Ok(bank)
    }

    /// Create a bank with a custom default pool; call `reload` to index the
    /// dataset directory
    pub fn with_defaults(dataset_dir: Option<PathBuf>, defaults: Arc<Vec<RawQuestion>>) -> Self {
        Self {
            dataset_dir,
            defaults,
            index: ArcSwap::from_pointee(TopicIndex::default()),
        }
    }

    /// Re-read the dataset and swap the index atomically
    ///
    /// Safe to call while selections are in flight; readers see the old index
    /// until the swap completes.
    pub async fn reload(&self) -> Result<()> {
        let next = match &self.dataset_dir {
            Some(dir) => Self::build_index(dir).await?,
            None => TopicIndex::default(),
        };
        self.index.store(Arc::new(next));
        Ok(())
    }

    /// Resolve a topic to a question pool, exact match first, then partial
    pub fn resolve(&self, topic: &str) -> Option<Arc<Vec<RawQuestion>>> {
        let index = self.index.load();
        index.exact(topic).or_else(|| index.partial(topic))
    }

    /// The default pool used when no curated topic matches
    pub fn default_pool(&self) -> Arc<Vec<RawQuestion>> {
        Arc::clone(&self.defaults)
    }

    /// Snapshot of curated topic names
    pub fn topics(&self) -> Vec<String> {
        self.index.load().names()
    }

    /// Number of questions for an exactly-matching topic, 0 when unknown
    pub fn question_count(&self, topic: &str) -> usize {
        self.index
            .load()
            .exact(&topic.trim().to_lowercase())
            .map(|questions| questions.len())
            .unwrap_or(0)
    }

    async fn build_index(dir: &Path) -> Result<TopicIndex> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("curated dataset directory {:?} is unreadable: {}", dir, e);
                return Ok(TopicIndex::default());
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                files.push(path);
            }
        }
        // Sorted file names keep partial-match iteration order deterministic
        // across reloads and platforms.
        files.sort();

        let mut index = TopicIndex::default();
        for path in files {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("skipping unreadable topic file {:?}: {}", path, e);
                    continue;
                }
            };
            let parsed: TopicFile = match serde_json::from_str(&content) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("skipping malformed topic file {:?}: {}", path, e);
                    continue;
                }
            };
            let questions = match parsed {
                TopicFile::Bare(questions) => questions,
                TopicFile::Wrapped { questions } => questions,
            };
            if questions.is_empty() {
                warn!("topic file {:?} contains no questions", path);
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            index.insert(stem.to_lowercase(), questions);
        }

        if index.is_empty() {
            debug!("curated dataset {:?} yielded no topics", dir);
        } else {
            info!("curated bank loaded: {} topics from {:?}", index.len(), dir);
        }
        Ok(index)
    }
}
