use skimatch_engine::SuggestEngine;

// App state - shared across handlers. The engine owns the catalog and the
// LLM client; nothing here is mutable.
pub struct AppState {
    pub engine: SuggestEngine,
}
