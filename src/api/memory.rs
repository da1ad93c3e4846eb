//! In-process API backend.
//!
//! [`MemoryApi`] implements [`RegexApi`] against data held in memory, optionally
//! seeded from a JSON document on disk. The binary uses it as its content service
//! and the test suites use it as a deterministic server.
//!
//! # Seed Format
//!
//! ```json
//! {
//!   "user": { "username": "ada", "email": "ada@example.com" },
//!   "posts": [
//!     { "id": 1, "expression": "^\\d+$", "views": 4, "avgMark": 4.5, "createdDate": "2024-03-01 10:00" }
//!   ],
//!   "history": [1],
//!   "authored": [1]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

use crate::api::backend::RegexApi;
use crate::domain::{ContentRecord, CreateOutcome, RegexHubError, Result, UserIdentity};

/// Format used for `createdDate` on new records.
const CREATED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// On-disk seed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub user: UserIdentity,

    #[serde(default)]
    pub posts: Vec<ContentRecord>,

    /// Ids the user has viewed, most recent first.
    #[serde(default)]
    pub history: Vec<i64>,

    /// Ids the user has authored.
    #[serde(default)]
    pub authored: Vec<i64>,
}

#[derive(Debug)]
struct MemoryData {
    user: UserIdentity,
    posts: BTreeMap<i64, ContentRecord>,
    history: Vec<i64>,
    authored: Vec<i64>,
    authenticated: bool,
}

impl MemoryData {
    fn newest_first(&self) -> Vec<ContentRecord> {
        self.posts.values().rev().cloned().collect()
    }

    fn resolve(&self, ids: &[i64]) -> Vec<ContentRecord> {
        ids.iter().filter_map(|id| self.posts.get(id).cloned()).collect()
    }

    fn require_auth(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(RegexHubError::Api("not authenticated".to_string()))
        }
    }

    fn next_id(&self) -> i64 {
        self.posts.keys().next_back().copied().unwrap_or(0).saturating_add(1)
    }
}

/// In-memory implementation of the content service.
///
/// # Thread Safety
///
/// State lives behind a `Mutex`, so one instance can be shared through an
/// [`ApiHandle`](crate::api::ApiHandle) by every open window.
#[derive(Debug)]
pub struct MemoryApi {
    data: Mutex<MemoryData>,
    available: AtomicBool,
}

impl Default for MemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryApi {
    /// Creates an empty, reachable, authenticated backend.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(SeedData::default())
    }

    /// Creates a backend from seed data. History and authorship ids that do not
    /// refer to a seeded post are dropped.
    #[must_use]
    pub fn from_seed(seed: SeedData) -> Self {
        let posts: BTreeMap<i64, ContentRecord> = seed.posts.into_iter().map(|p| (p.id, p)).collect();
        let history = seed.history.into_iter().filter(|id| posts.contains_key(id)).collect();
        let authored = seed.authored.into_iter().filter(|id| posts.contains_key(id)).collect();

        tracing::debug!(post_count = posts.len(), username = %seed.user.username, "memory api seeded");

        Self {
            data: Mutex::new(MemoryData {
                user: seed.user,
                posts,
                history,
                authored,
                authenticated: true,
            }),
            available: AtomicBool::new(true),
        }
    }

    /// Loads a seed document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading seed data");
        let contents = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&contents)
            .map_err(|e| RegexHubError::Config(format!("failed to parse seed JSON: {e}")))?;
        Ok(Self::from_seed(seed))
    }

    /// Simulates the service going offline or coming back.
    pub fn set_available(&self, available: bool) {
        tracing::debug!(available, "memory api availability changed");
        self.available.store(available, Ordering::SeqCst);
    }

    /// Whether the session is still authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.data().map(|d| d.authenticated).unwrap_or(false)
    }

    fn data(&self) -> Result<MutexGuard<'_, MemoryData>> {
        self.data
            .lock()
            .map_err(|e| RegexHubError::Api(format!("state lock poisoned: {e}")))
    }
}

impl RegexApi for MemoryApi {
    fn check_availability(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn get_all_posts(&self) -> Result<Vec<ContentRecord>> {
        let _span = tracing::debug_span!("memory_get_all_posts").entered();
        let posts = self.data()?.newest_first();
        tracing::debug!(count = posts.len(), "retrieved posts");
        Ok(posts)
    }

    fn search_posts(&self, query: &str) -> Result<Vec<ContentRecord>> {
        let _span = tracing::debug_span!("memory_search_posts", query = %query).entered();

        let data = self.data()?;
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Ok(data.newest_first());
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, ContentRecord)> = data
            .posts
            .values()
            .filter_map(|post| {
                matcher
                    .fuzzy_match(&post.expression.to_lowercase(), &needle)
                    .map(|score| (score, post.clone()))
            })
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| score_b.cmp(score_a).then(b.id.cmp(&a.id)));

        tracing::debug!(count = scored.len(), "search matched");
        Ok(scored.into_iter().map(|(_, post)| post).collect())
    }

    fn user_views_history(&self) -> Result<Vec<ContentRecord>> {
        let data = self.data()?;
        data.require_auth()?;
        Ok(data.resolve(&data.history))
    }

    fn author_posts(&self) -> Result<Vec<ContentRecord>> {
        let data = self.data()?;
        data.require_auth()?;
        let mut posts = data.resolve(&data.authored);
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    fn get_post(&self, id: i64) -> Result<ContentRecord> {
        let _span = tracing::debug_span!("memory_get_post", id).entered();

        let mut data = self.data()?;
        data.require_auth()?;

        let post = data.posts.get_mut(&id).ok_or(RegexHubError::NotFound(id))?;
        post.views = post.views.saturating_add(1);
        let post = post.clone();

        data.history.retain(|seen| *seen != id);
        data.history.insert(0, id);

        tracing::debug!(views = post.views, "post viewed");
        Ok(post)
    }

    fn create_regex(&self, text: &str) -> Result<(ContentRecord, CreateOutcome)> {
        let _span = tracing::debug_span!("memory_create_regex", len = text.len()).entered();

        let mut data = self.data()?;
        data.require_auth()?;

        if let Err(e) = regex::Regex::new(text) {
            tracing::debug!(error = %e, "expression rejected");
            return Ok((ContentRecord::new(0, text, 0, 0.0, ""), CreateOutcome::InvalidExpression));
        }

        if let Some(existing) = data.posts.values().find(|p| p.expression == text) {
            tracing::debug!(existing_id = existing.id, "duplicate expression");
            return Ok((existing.clone(), CreateOutcome::DuplicateExpression));
        }

        let id = data.next_id();
        let created = chrono::Utc::now().format(CREATED_DATE_FORMAT).to_string();
        let record = ContentRecord::new(id, text, 0, 0.0, created);

        data.posts.insert(id, record.clone());
        data.authored.push(id);

        tracing::debug!(id, "expression created");
        Ok((record, CreateOutcome::Created))
    }

    fn exit_user(&self) -> Result<()> {
        let mut data = self.data()?;
        data.authenticated = false;
        tracing::debug!(username = %data.user.username, "user signed out");
        Ok(())
    }

    fn identity(&self) -> UserIdentity {
        self.data().map(|d| d.user.clone()).unwrap_or_default()
    }
}
