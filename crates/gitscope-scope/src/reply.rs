//! Presentation model shared with the host
//!
//! The host owns rendering. The runner only describes categories, results
//! and preview widgets, then hands them over through [`SearchReply`] and
//! [`PreviewReply`].

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// JSON layout template for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryRenderer(String);

impl CategoryRenderer {
    /// Wraps a template after checking that it parses as JSON
    ///
    /// # Errors
    ///
    /// Returns error if the template is not valid JSON
    pub fn new(template: impl Into<String>) -> Result<Self, serde_json::Error> {
        let template = template.into();
        serde_json::from_str::<Value>(&template)?;
        Ok(Self(template))
    }

    /// Wraps one of the built-in templates in [`crate::templates`]
    pub(crate) fn builtin(template: &'static str) -> Self {
        Self(template.to_string())
    }

    pub fn template(&self) -> &str {
        &self.0
    }
}

/// A registered group of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub renderer: CategoryRenderer,
}

impl Category {
    pub fn new(id: &str, title: &str, icon: &str, renderer: CategoryRenderer) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            renderer,
        }
    }
}

/// One result card
///
/// `uri`, `title` and `art` are fixed fields. Everything else the preview
/// needs (`description`, `developer_uri`, ...) lives in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorisedResult {
    pub category: String,
    pub uri: String,
    pub title: String,
    pub art: String,
    pub attributes: BTreeMap<String, Value>,
}

impl CategorisedResult {
    pub fn new(category: &Category) -> Self {
        Self {
            category: category.id.clone(),
            uri: String::new(),
            title: String::new(),
            art: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn set_uri(&mut self, uri: impl Into<String>) {
        self.uri = uri.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_art(&mut self, art: impl Into<String>) {
        self.art = art.into();
    }

    pub fn set_attr(&mut self, key: &str, value: impl Into<Value>) {
        self.attributes.insert(key.to_string(), value.into());
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// String attribute, `None` when absent or not a string
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attr(key).and_then(Value::as_str)
    }

    /// Field lookup as seen by preview attribute mappings
    pub fn field(&self, key: &str) -> Option<Value> {
        match key {
            "uri" => Some(Value::from(self.uri.as_str())),
            "title" => Some(Value::from(self.title.as_str())),
            "art" => Some(Value::from(self.art.as_str())),
            other => self.attr(other).cloned(),
        }
    }
}

/// Sink for search results
pub trait SearchReply {
    fn register_category(
        &mut self,
        id: &str,
        title: &str,
        icon: &str,
        renderer: CategoryRenderer,
    ) -> Category;

    /// Hands one result to the host
    ///
    /// Returns `false` once the query has been cancelled; the runner stops
    /// pushing at that point.
    fn push(&mut self, result: CategorisedResult) -> bool;

    fn error(&mut self, message: &str);
}

/// Widget arrangement for one column count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    pub columns: Vec<Vec<String>>,
}

impl ColumnLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(mut self, widget_ids: &[&str]) -> Self {
        self.columns
            .push(widget_ids.iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewWidget {
    pub id: String,
    pub widget_type: String,
    /// widget attribute → result field
    pub attribute_mappings: BTreeMap<String, String>,
    pub attribute_values: BTreeMap<String, Value>,
}

impl PreviewWidget {
    pub fn new(id: &str, widget_type: &str) -> Self {
        Self {
            id: id.to_string(),
            widget_type: widget_type.to_string(),
            attribute_mappings: BTreeMap::new(),
            attribute_values: BTreeMap::new(),
        }
    }

    pub fn add_attribute_mapping(&mut self, attribute: &str, field: &str) {
        self.attribute_mappings
            .insert(attribute.to_string(), field.to_string());
    }

    pub fn add_attribute_value(&mut self, attribute: &str, value: impl Into<Value>) {
        self.attribute_values
            .insert(attribute.to_string(), value.into());
    }

    /// Resolves every attribute against a result: mappings first, then
    /// explicit values on top
    pub fn resolve(&self, result: &CategorisedResult) -> BTreeMap<String, Value> {
        let mut resolved: BTreeMap<String, Value> = self
            .attribute_mappings
            .iter()
            .filter_map(|(attribute, field)| {
                result.field(field).map(|value| (attribute.clone(), value))
            })
            .collect();
        for (attribute, value) in &self.attribute_values {
            resolved.insert(attribute.clone(), value.clone());
        }
        resolved
    }
}

/// Sink for preview layouts and widgets
pub trait PreviewReply {
    fn register_layout(&mut self, layouts: Vec<ColumnLayout>);

    /// Returns `false` once the preview has been cancelled
    fn push(&mut self, widgets: Vec<PreviewWidget>) -> bool;
}

/// In-memory reply that keeps everything it receives
///
/// Used by hosts that render after the query finishes, and by tests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectedReply {
    pub categories: Vec<Category>,
    pub results: Vec<CategorisedResult>,
    pub errors: Vec<String>,
    pub layouts: Vec<ColumnLayout>,
    pub widgets: Vec<PreviewWidget>,
    /// Reject results beyond this many
    #[serde(skip)]
    pub limit: Option<usize>,
}

impl CollectedReply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

impl SearchReply for CollectedReply {
    fn register_category(
        &mut self,
        id: &str,
        title: &str,
        icon: &str,
        renderer: CategoryRenderer,
    ) -> Category {
        let category = Category::new(id, title, icon, renderer);
        self.categories.push(category.clone());
        category
    }

    fn push(&mut self, result: CategorisedResult) -> bool {
        if self.limit.is_some_and(|limit| self.results.len() >= limit) {
            return false;
        }
        self.results.push(result);
        true
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

impl PreviewReply for CollectedReply {
    fn register_layout(&mut self, layouts: Vec<ColumnLayout>) {
        self.layouts = layouts;
    }

    fn push(&mut self, widgets: Vec<PreviewWidget>) -> bool {
        self.widgets.extend(widgets);
        true
    }
}
