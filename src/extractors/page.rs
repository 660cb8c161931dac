use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::Deserialize;
use std::convert::Infallible;

/// The 1-based `page` query parameter.
///
/// A missing or non-integer value falls back to the first page. Non-positive values are kept
/// as they are and produce an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl Page {
    pub fn from_uri(uri: &Uri) -> Self {
        let Ok(Query(query)) = Query::<PageQuery>::try_from_uri(uri) else {
            return Page::default();
        };

        query
            .page
            .and_then(|page| page.trim().parse().ok())
            .map(Page)
            .unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Page::from_uri(&parts.uri))
    }
}
