//! Ports between the search controllers and the page hosting them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Text field whose current value drives a search.
pub trait InputSource: Send + Sync {
    fn value(&self) -> String;
}

/// Table body whose whole content is replaced on every render.
pub trait RenderTarget: Send + Sync {
    /// Current markup.
    fn html(&self) -> String;

    fn set_html(&self, html: String);
}

/// Looks up the anchors a controller binds to, by element id.
pub trait Page {
    fn input(&self, id: &str) -> Option<Arc<dyn InputSource>>;
    fn render_target(&self, id: &str) -> Option<Arc<dyn RenderTarget>>;
}

/// In-memory text input.
#[derive(Debug, Default)]
pub struct TextInput {
    value: Mutex<String>,
}

impl TextInput {
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

impl InputSource for TextInput {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// In-memory table body keeping the last markup it was given.
#[derive(Debug, Default)]
pub struct TableBody {
    html: Mutex<String>,
    renders: Mutex<usize>,
}

impl TableBody {
    pub fn html(&self) -> String {
        self.html
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times the content was replaced.
    pub fn render_count(&self) -> usize {
        *self.renders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of `<tr>` rows in the current markup.
    pub fn row_count(&self) -> usize {
        self.html().matches("<tr").count()
    }
}

impl RenderTarget for TableBody {
    fn html(&self) -> String {
        TableBody::html(self)
    }

    fn set_html(&self, html: String) {
        *self.html.lock().unwrap_or_else(PoisonError::into_inner) = html;
        *self.renders.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}

/// Headless [`Page`] built from registered inputs and table bodies.
#[derive(Default)]
pub struct MemoryPage {
    inputs: HashMap<String, Arc<dyn InputSource>>,
    targets: HashMap<String, Arc<dyn RenderTarget>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, id: &str, input: Arc<dyn InputSource>) -> Self {
        self.inputs.insert(id.to_string(), input);
        self
    }

    pub fn with_render_target(mut self, id: &str, target: Arc<dyn RenderTarget>) -> Self {
        self.targets.insert(id.to_string(), target);
        self
    }
}

impl Page for MemoryPage {
    fn input(&self, id: &str) -> Option<Arc<dyn InputSource>> {
        self.inputs.get(id).cloned()
    }

    fn render_target(&self, id: &str) -> Option<Arc<dyn RenderTarget>> {
        self.targets.get(id).cloned()
    }
}
