//! Memoized rendering.
//!
//! Rendering is a pure function of the model, so rendered text is keyed by
//! the model itself. A session keeps its cache across runs; unchanged
//! methods are not rendered again.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use resgen_ir::ResultTypeModel;

#[derive(Debug, Default)]
pub struct RenderCache {
    rendered: DashMap<ResultTypeModel, Arc<str>>,
    hits: AtomicUsize,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered text for `model`, rendering it on first use.
    pub fn get_or_render(&self, model: &ResultTypeModel) -> Arc<str> {
        if let Some(text) = self.rendered.get(model) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(text.value());
        }

        let text: Arc<str> = resgen_codegen::render(model).into();
        let entry = self.rendered.entry(model.clone()).or_insert(text);
        Arc::clone(entry.value())
    }

    /// Number of distinct models rendered.
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Lookups answered without rendering.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.rendered.clear();
        self.hits.store(0, Ordering::Relaxed);
    }
}
