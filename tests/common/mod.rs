#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use regexhub::api::{ApiHandle, MemoryApi, RegexApi, SeedData};
use regexhub::app::{handle_event, AppState, Event, RefreshPolicy};
use regexhub::domain::{ContentRecord, CreateOutcome, Result, UserIdentity};

/// Per-method call counters.
#[derive(Debug, Default)]
pub struct Calls {
    pub check_availability: AtomicUsize,
    pub get_all_posts: AtomicUsize,
    pub search_posts: AtomicUsize,
    pub user_views_history: AtomicUsize,
    pub author_posts: AtomicUsize,
    pub get_post: AtomicUsize,
    pub create_regex: AtomicUsize,
    pub exit_user: AtomicUsize,
}

impl Calls {
    pub fn total(&self) -> usize {
        [
            &self.check_availability,
            &self.get_all_posts,
            &self.search_posts,
            &self.user_views_history,
            &self.author_posts,
            &self.get_post,
            &self.create_regex,
            &self.exit_user,
        ]
        .iter()
        .map(|c| c.load(Ordering::SeqCst))
        .sum()
    }

    /// Calls other than the availability check.
    pub fn remote(&self) -> usize {
        self.total() - self.check_availability.load(Ordering::SeqCst)
    }
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// [`MemoryApi`] wrapper that records every call.
#[derive(Debug)]
pub struct RecordingApi {
    pub inner: MemoryApi,
    pub calls: Calls,
}

impl RecordingApi {
    pub fn new(seed: SeedData) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryApi::from_seed(seed),
            calls: Calls::default(),
        })
    }

    fn hit(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

impl RegexApi for RecordingApi {
    fn check_availability(&self) -> bool {
        Self::hit(&self.calls.check_availability);
        self.inner.check_availability()
    }

    fn get_all_posts(&self) -> Result<Vec<ContentRecord>> {
        Self::hit(&self.calls.get_all_posts);
        self.inner.get_all_posts()
    }

    fn search_posts(&self, query: &str) -> Result<Vec<ContentRecord>> {
        Self::hit(&self.calls.search_posts);
        self.inner.search_posts(query)
    }

    fn user_views_history(&self) -> Result<Vec<ContentRecord>> {
        Self::hit(&self.calls.user_views_history);
        self.inner.user_views_history()
    }

    fn author_posts(&self) -> Result<Vec<ContentRecord>> {
        Self::hit(&self.calls.author_posts);
        self.inner.author_posts()
    }

    fn get_post(&self, id: i64) -> Result<ContentRecord> {
        Self::hit(&self.calls.get_post);
        self.inner.get_post(id)
    }

    fn create_regex(&self, text: &str) -> Result<(ContentRecord, CreateOutcome)> {
        Self::hit(&self.calls.create_regex);
        self.inner.create_regex(text)
    }

    fn exit_user(&self) -> Result<()> {
        Self::hit(&self.calls.exit_user);
        self.inner.exit_user()
    }

    fn identity(&self) -> UserIdentity {
        self.inner.identity()
    }
}

pub fn seed() -> SeedData {
    SeedData {
        user: UserIdentity {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        },
        posts: vec![
            ContentRecord::new(1, r"^\d{3}-\d{4}$", 12, 4.5, "2024-03-01 10:00"),
            ContentRecord::new(2, "[A-Z][a-z]+", 3, 3.0, "2024-03-02 11:15"),
            ContentRecord::new(3, r"\bcolou?r\b", 0, 0.0, "2024-03-03 09:40"),
            ContentRecord::new(4, r"^\w+@\w+\.com$", 7, 10.0 / 3.0, "2024-03-04 18:05"),
        ],
        history: vec![2, 1],
        authored: vec![3, 4],
    }
}

/// Main window over a recording API, already loaded.
pub fn loaded_state(policy: RefreshPolicy) -> (Arc<RecordingApi>, AppState) {
    let api = RecordingApi::new(seed());
    let handle: ApiHandle = api.clone();
    let mut state = AppState::new(handle, policy);
    handle_event(&mut state, &Event::Load).expect("load");
    (api, state)
}

pub fn listing_ids(state: &AppState) -> Vec<i64> {
    state.lists.listing.rows().iter().map(|r| r.record_id).collect()
}
