//! WebAssembly bindings for the pure search path.
//!
//! The page's own script owns fetching and the DOM; it hands us the index
//! body it already downloaded and gets back either the structured view or
//! ready-to-insert markup.

use crate::config::SiteConfig;
use crate::render::ResultsView;
use crate::search::search_view;
use crate::types::SearchIndex;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// WASM-accessible search over one parsed index.
#[wasm_bindgen]
pub struct WikiSearcher {
    index: SearchIndex,
    config: SiteConfig,
    page_path: String,
}

#[wasm_bindgen]
impl WikiSearcher {
    /// Parse the index artifact body. `page_path` is the current page's path,
    /// used to resolve result links.
    #[wasm_bindgen(constructor)]
    pub fn new(index_json: &str, page_path: &str) -> Result<WikiSearcher, JsValue> {
        let index = SearchIndex::from_json(index_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse search index: {}", e)))?;
        Ok(WikiSearcher {
            index,
            config: SiteConfig::default(),
            page_path: page_path.to_string(),
        })
    }

    /// Number of indexed articles.
    #[wasm_bindgen]
    pub fn article_count(&self) -> usize {
        self.index.len()
    }

    /// Ranked, rendered results as a JS object.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&self.view(query)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Ranked results as markup for the results container.
    #[wasm_bindgen]
    pub fn search_html(&self, query: &str) -> String {
        self.view(query).to_html()
    }
}

impl WikiSearcher {
    fn view(&self, query: &str) -> ResultsView {
        let paths = self.config.resolve(&self.page_path);
        search_view(query, &self.index, &paths, self.config.max_results)
    }
}
