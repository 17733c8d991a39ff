//! Built-in default question pool
//!
//! Used when no curated topic matches a request. Deployments can replace it
//! through `CuratedBank::with_defaults`; keeping it non-empty is what makes
//! `ContentUnavailable` effectively unreachable in a correctly deployed
//! system.

use super::types::RawQuestion;
use once_cell::sync::Lazy;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<Vec<RawQuestion>>> = Lazy::new(|| {
    Arc::new(vec![
        RawQuestion::new(
            "Which data structure gives O(1) average-case lookup by key?",
            vec![
                "Hash map".to_string(),
                "Linked list".to_string(),
                "Binary search tree".to_string(),
                "Sorted array".to_string(),
            ],
            0,
        )
        .with_difficulty("easy")
        .with_concept("data structures")
        .with_explanation("Hash maps index entries by a hash of the key, so the average lookup cost does not grow with the number of entries.")
        .with_hint("Think about which structure does not need to walk or search its entries."),
        RawQuestion::new(
            "What does the acronym API stand for?",
            vec![
                "Application Programming Interface".to_string(),
                "Automated Program Integration".to_string(),
                "Applied Protocol Implementation".to_string(),
                "Abstract Process Invocation".to_string(),
            ],
            0,
        )
        .with_difficulty("easy")
        .with_concept("terminology")
        .with_explanation("An API is the contract a program exposes for other programs to call."),
        RawQuestion::new(
            "Which HTTP status code indicates that a requested resource was not found?",
            vec![
                "200".to_string(),
                "301".to_string(),
                "404".to_string(),
                "500".to_string(),
            ],
            2,
        )
        .with_difficulty("easy")
        .with_concept("http")
        .with_explanation("4xx codes are client errors; 404 specifically means the server found no resource at the requested path.")
        .with_hint("It is the most famous error code on the web."),
        RawQuestion::new(
            "What is the time complexity of binary search on a sorted array of n elements?",
            vec![
                "O(1)".to_string(),
                "O(log n)".to_string(),
                "O(n)".to_string(),
                "O(n log n)".to_string(),
            ],
            1,
        )
        .with_difficulty("medium")
        .with_concept("algorithms")
        .with_explanation("Each comparison halves the remaining search range, so the number of steps grows logarithmically."),
        RawQuestion::new(
            "In version control, what does a merge conflict indicate?",
            vec![
                "The repository is corrupted".to_string(),
                "Two changes touched the same lines and need manual resolution".to_string(),
                "A branch was deleted remotely".to_string(),
                "The working tree is clean".to_string(),
            ],
            1,
        )
        .with_difficulty("medium")
        .with_concept("version control")
        .with_explanation("The merge machinery cannot pick between overlapping edits, so it asks a human to decide."),
        RawQuestion::new(
            "Which property must hold for a function to be safely memoized?",
            vec![
                "It performs I/O".to_string(),
                "It returns the same output for the same input".to_string(),
                "It runs in constant time".to_string(),
                "It takes a single argument".to_string(),
            ],
            1,
        )
        .with_difficulty("medium")
        .with_concept("functional programming")
        .with_explanation("Memoization replays a stored result, which is only correct when the function is deterministic in its inputs.")
        .with_hint("Caching a result only works if recomputing would give the same answer."),
        RawQuestion::new(
            "What problem does a write-through cache avoid compared to a write-back cache?",
            vec![
                "Slow reads on a cache hit".to_string(),
                "Losing acknowledged writes when the cache fails".to_string(),
                "Storing the same key twice".to_string(),
                "Evicting hot entries under pressure".to_string(),
            ],
            1,
        )
        .with_difficulty("hard")
        .with_concept("caching")
        .with_explanation("Write-through persists to the backing store before acknowledging, so a cache failure cannot drop a confirmed write."),
        RawQuestion::new(
            "Why can two concurrent compute-on-miss callers both run the expensive computation?",
            vec![
                "The cache rejects concurrent reads".to_string(),
                "Both observe the miss before either write lands".to_string(),
                "TTLs expire during computation".to_string(),
                "Hash collisions corrupt the key".to_string(),
            ],
            1,
        )
        .with_difficulty("hard")
        .with_concept("concurrency")
        .with_explanation("Without single-flight deduplication the check and the write are separate steps, so both callers can pass the check before either stores a result."),
    ])
});

/// The built-in default pool
pub fn builtin_questions() -> Arc<Vec<RawQuestion>> {
    Arc::clone(&BUILTIN)
}
