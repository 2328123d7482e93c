//! Paginated Feed
//!
//! This example drives an infinite-scroll article feed against an in-memory
//! backend that occasionally fails.
//!
//! Key concepts:
//! - First page and continuation paths selected by the cursor's page
//! - Caller-held snapshot replaced by the last emitted state
//! - Status observer recording the transition history
//! - Pull-to-refresh by resetting the cursor to page 1
//! - Checkpointing the feed between sessions
//!
//! Run with: cargo run --example paginated_feed

use fetchstate::builder::exhaustion_engine;
use fetchstate::checkpoint::Checkpoint;
use fetchstate::core::{Outcome, PaginationState, PagingStatus, Query, Snapshot};
use fetchstate::effects::{FetchEngine, StatusRecorder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Article {
    id: u32,
    title: String,
}

struct Backend {
    articles: Vec<Article>,
    fail_on_page: Option<u32>,
}

impl Backend {
    fn new(total: u32) -> Self {
        Self {
            articles: (1..=total)
                .map(|id| Article {
                    id,
                    title: format!("Article #{id}"),
                })
                .collect(),
            fail_on_page: None,
        }
    }

    async fn fetch(&self, query: &Query) -> Result<Outcome<Vec<Article>>, std::io::Error> {
        if self.fail_on_page == Some(query.page()) {
            return Ok(Outcome::failure(format!(
                "page {} unavailable",
                query.page()
            )));
        }

        let page: Vec<Article> = self
            .articles
            .iter()
            .skip(query.offset() as usize)
            .take(query.size() as usize)
            .cloned()
            .collect();
        Ok(Outcome::success(page))
    }
}

struct Feed {
    engine: FetchEngine,
    state: PaginationState<Article>,
    recorder: StatusRecorder<PagingStatus>,
}

impl Feed {
    fn new(engine: FetchEngine) -> Self {
        let state = engine.first_page_state();
        Self {
            engine,
            state,
            recorder: StatusRecorder::new(),
        }
    }

    async fn load_more(&mut self, backend: &Backend) {
        let pending = backend.fetch(self.state.query());
        let mut latest = None;

        self.engine
            .run_paged(
                pending,
                self.state.clone(),
                |state: PaginationState<Article>| {
                    println!(
                        "  -> {:<8} items={:<3} page={} reached_max={}",
                        state.status(),
                        state.len(),
                        state.query().page(),
                        state.reached_max()
                    );
                    latest = Some(state);
                },
                &mut self.recorder,
            )
            .await;

        match latest {
            Some(state) => self.state = state,
            None => println!("  (no more pages, request skipped)"),
        }
    }

    fn refresh(&mut self) {
        let query = self.state.query().clone().first_page();
        self.state = self.state.clone().with_query(query);
    }
}

#[tokio::main]
async fn main() {
    println!("=== Paginated Feed Example ===\n");

    let mut backend = Backend::new(11);
    let engine = match exhaustion_engine(4) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("invalid engine configuration: {e}");
            return;
        }
    };
    let mut feed = Feed::new(engine);

    println!("Initial load:");
    feed.load_more(&backend).await;

    println!("\nScroll (backend fails on page 2):");
    backend.fail_on_page = Some(2);
    feed.load_more(&backend).await;
    if let Some(message) = feed.state.error_message() {
        println!("  error shown to user: {message}");
    }

    println!("\nRetry:");
    backend.fail_on_page = None;
    feed.load_more(&backend).await;

    println!("\nScroll until the feed is exhausted:");
    for _ in 0..3 {
        feed.load_more(&backend).await;
    }

    println!("\nLoaded {} articles:", feed.state.len());
    for article in feed.state.list() {
        println!("  {:>2}. {}", article.id, article.title);
    }

    println!("\nCheckpoint and restore:");
    match Checkpoint::capture(feed.state.clone()).to_json() {
        Ok(json) => match Checkpoint::<PaginationState<Article>>::from_json(&json) {
            Ok(checkpoint) => {
                let restored = checkpoint.restore();
                println!(
                    "  restored {} articles at page {}",
                    restored.len(),
                    restored.query().page()
                );
            }
            Err(e) => eprintln!("  restore failed: {e}"),
        },
        Err(e) => eprintln!("  capture failed: {e}"),
    }

    println!("\nPull to refresh:");
    feed.refresh();
    feed.load_more(&backend).await;

    let history = feed.recorder.history();
    println!("\nStatus path:");
    let path: Vec<String> = history
        .path()
        .iter()
        .map(|status| status.to_string())
        .collect();
    println!("  {}", path.join(" -> "));
    println!(
        "  fetches: {}, errors: {}",
        history.fetch_count(),
        history.error_count()
    );

    println!("\n=== Example Complete ===");
}
