/// Search planning and stale-response protection

use crate::bookmark::SourceType;
use crate::operations::toggle;

/// Results requested from `/search`
pub const SEARCH_TOP_N: usize = 10;

/// Parameters of one `/search` call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub top_n: usize,
    pub precision: bool,
    pub types: Vec<SourceType>,
    pub tags: Vec<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> SearchRequest {
        SearchRequest {
            query: query.into(),
            top_n: SEARCH_TOP_N,
            precision: false,
            types: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Clicking a tag searches for the tag text with default options.
    pub fn for_tag(tag: &str) -> SearchRequest {
        SearchRequest::new(tag)
    }

    /// Query string pairs; `types` and `tags` are comma-joined and sent even when empty.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let types: Vec<&str> = self.types.iter().map(|t| t.label()).collect();
        vec![
            ("query", self.query.clone()),
            ("top_n", self.top_n.to_string()),
            ("precision", self.precision.to_string()),
            ("types", types.join(",")),
            ("tags", self.tags.join(",")),
        ]
    }
}

/// Search bar state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub query: String,
    pub precision: bool,
    pub types: Vec<SourceType>,
    pub tags: Vec<String>,
}

impl SearchForm {
    pub fn has_active_facet(&self) -> bool {
        !self.types.is_empty() || !self.tags.is_empty()
    }

    /// Whether the filter trigger shows as checked
    pub fn indicator_checked(&self) -> bool {
        self.has_active_facet() || self.precision
    }

    pub fn toggle_type(&mut self, source_type: SourceType) {
        toggle(&mut self.types, source_type);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPlan {
    /// Blank query: reload the full list and leave search mode.
    ShowAll,
    Query(SearchRequest),
}

pub fn plan(form: &SearchForm) -> SearchPlan {
    let query = form.query.trim();
    if query.is_empty() {
        return SearchPlan::ShowAll;
    }

    SearchPlan::Query(SearchRequest {
        query: query.to_string(),
        top_n: SEARCH_TOP_N,
        precision: form.precision,
        types: form.types.clone(),
        tags: form.tags.clone(),
    })
}

/// Handle for one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request generation counter.
///
/// Each list or search request takes a ticket before it is sent. When the
/// response arrives it is applied only if no newer request has been issued
/// since, so a slow earlier search can not overwrite a later one.
#[derive(Debug, Default)]
pub struct SearchSequence {
    latest: u64,
}

impl SearchSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
