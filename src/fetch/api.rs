use async_trait::async_trait;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::data::FetchResponse;
use crate::state::query::{FilterMap, Query};

/// Request parameters for one page, derived from a [`Query`]
///
/// Empty text, an unset category and empty filter values are left out
/// entirely rather than sent blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchRequest {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub filters: FilterMap,
}

impl From<&Query> for FetchRequest {
    fn from(query: &Query) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Self {
            page: query.page(),
            q: non_empty(query.text()),
            category: query.category().and_then(non_empty),
            filters: query
                .filters()
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (*key, value.clone()))
                .collect(),
        }
    }
}

impl FetchRequest {
    /// Flat `name=value` pairs, for clients building a query string
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string())];
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        params.extend(self.filters.iter().map(|(key, value)| (key.as_str(), value.clone())));
        params
    }
}

/// The remote image catalog
///
/// Implementations own the transport; a `success = false` answer is a normal
/// `Ok` response, only failures to get any answer are `Err`.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, request: &FetchRequest) -> Result<FetchResponse, ApiError>;
}
