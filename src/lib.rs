//! Client-side search and hover previews for statically generated wikis.
//!
//! The site build writes three kinds of artifacts: a JSON search index, one
//! HTML fragment per page, and a small list of random-page candidates. This
//! crate is everything the browser does with them: rank the index against a
//! query, render the hits, preview linked pages on hover, and jump to a random
//! page. No server runs queries.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  loader.rs  │────▶│  search/     │────▶│  render.rs  │
//! │ (IndexLoader│     │ (search,     │     │ (ResultsView│
//! │  memoized)  │     │  SearchBox)  │     │  highlight) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  random.rs  │     │  timer.rs    │◀────│  preview/   │
//! │ (navigator) │     │ (TimerSlot)  │     │ (popovers)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        └───────────────────┴─────────────────────┘
//!                            ▼
//!                     session.rs (Session)
//! ```
//!
//! The host environment plugs in through four traits: [`ArtifactSource`]
//! (fetching), [`PopoverSurface`] (the page), [`Navigation`] (the location bar)
//! and [`ResultsSink`] (the results container). Everything else is core.
//!
//! # Usage
//!
//! ```ignore
//! use wikilens::{search, render, ArticleRecord, ArtifactPaths};
//!
//! let index = vec![ArticleRecord::new("paris.html", "Paris").with_inlinks(3)];
//! let results = search("par", &index);
//! assert_eq!(results[0].score, 53);
//!
//! let view = render(&results, "par", &ArtifactPaths::default());
//! println!("{}", view.to_html());
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod preview;
pub mod random;
pub mod render;
mod scoring;
pub mod search;
pub mod session;
pub mod testing;
pub mod timer;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{ArtifactPaths, PlacementRules, SiteConfig, Timing};
pub use error::{ArtifactError, ConfigError};
pub use loader::{fetch_index, ArtifactSource, IndexLoader};
pub use preview::placement::{place, Position, Rect, Size, Viewport};
pub use preview::{
    preview_target, PopoverId, PopoverSurface, PreviewController, PreviewLink, PreviewPhase,
};
pub use random::{CandidateSource, Navigation, RandomNavigator, RandomOutcome};
pub use render::{escape_html, highlight, render, RenderedResult, ResultsView};
pub use scoring::{
    inlink_boost, score_article, title_score, CATEGORY_MATCH_SCORE, EXACT_TITLE_SCORE,
    KEYWORD_SCORE, MAX_INLINK_BOOST, SUMMARY_SCORE, TITLE_PREFIX_SCORE, TITLE_SUBSTRING_SCORE,
    TYPE_MATCH_SCORE,
};
pub use search::{
    is_searchable, parse_query, search, search_view, search_with_limit, ResultsSink, SearchBox,
    MAX_RESULTS, MIN_QUERY_LEN,
};
pub use session::{Adapters, Session};
pub use timer::TimerSlot;
pub use types::{ArticleRecord, RandomCandidate, RandomCandidates, ScoredResult, SearchIndex};

#[cfg(feature = "wasm")]
pub use wasm::WikiSearcher;
