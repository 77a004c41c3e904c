//! Pagination strategy selection and the two fetch-all loops.

use serde_json::{Map, Value, json};
use vodnode_catalog::{OperationDescriptor, PaginationMode};

use crate::error::{DispatchError, DispatchResult};
use crate::normalize::{ItemExtractor, page_items};
use crate::provider::{ApiRequest, ApiService};

/// Tracing target for pagination loops.
pub const TRACING_TARGET: &str = "vodnode_engine::pagination";

/// Offset query keys.
pub const LIMIT: &str = "limit";
pub const SKIP: &str = "skip";
/// Page-number query keys.
pub const PAGE: &str = "page";
pub const PER_PAGE: &str = "per_page";

/// How an operation's request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationPlan {
    /// One call, no pagination parameters injected.
    Single,
    /// One call with `limit` and a defaulted `skip`.
    LimitSkip { limit: u32 },
    /// One call with `per_page` and a defaulted `page`.
    PagePerPage { per_page: u32 },
    /// Offset loop until a short page.
    AllLimitSkip { page_size: u32 },
    /// Page-number loop until a short page.
    AllPagePerPage { page_size: u32 },
}

impl PaginationPlan {
    /// Chooses the plan for `descriptor`.
    ///
    /// Operations that are not paginated GETs always get [`Self::Single`].
    pub fn select(
        descriptor: &OperationDescriptor,
        return_all: bool,
        limit: u32,
        page_size: u32,
    ) -> Self {
        if !descriptor.method.is_get() {
            return Self::Single;
        }

        match (descriptor.pagination, return_all) {
            (PaginationMode::None, _) => Self::Single,
            (PaginationMode::LimitSkip, true) => Self::AllLimitSkip { page_size },
            (PaginationMode::LimitSkip, false) => Self::LimitSkip { limit },
            (PaginationMode::PagePerPage, true) => Self::AllPagePerPage { page_size },
            (PaginationMode::PagePerPage, false) => Self::PagePerPage { per_page: limit },
        }
    }

    /// Returns true for the fetch-all loops.
    pub const fn is_loop(&self) -> bool {
        matches!(self, Self::AllLimitSkip { .. } | Self::AllPagePerPage { .. })
    }

    /// Writes the single-call pagination parameters into `query`.
    ///
    /// Loop plans leave `query` untouched; the loops manage it per page.
    pub fn apply(&self, query: &mut Map<String, Value>) {
        match *self {
            Self::LimitSkip { limit } => {
                query.insert(LIMIT.to_owned(), json!(limit));
                query.entry(SKIP).or_insert(json!(0));
            }
            Self::PagePerPage { per_page } => {
                query.insert(PER_PAGE.to_owned(), json!(per_page));
                query.entry(PAGE).or_insert(json!(1));
            }
            Self::Single | Self::AllLimitSkip { .. } | Self::AllPagePerPage { .. } => {}
        }
    }
}

/// Counters shared by both loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Items requested per page.
    pub page_size: u32,
    /// Number of consecutive full pages after which the loop gives up.
    pub max_pages: u32,
}

/// Fetches every page using `limit`/`skip`.
///
/// `skip` starts at the value already in the query, or 0.
pub async fn fetch_all_limit_skip(
    service: &ApiService,
    request: ApiRequest,
    limits: PageLimits,
    extractor: &dyn ItemExtractor,
) -> DispatchResult<Vec<Value>> {
    let start = query_number(&request.query, SKIP).unwrap_or(0);
    fetch_all(service, request, limits, extractor, |query, index| {
        let skip = index
            .checked_mul(u64::from(limits.page_size))
            .and_then(|offset| start.checked_add(offset))
            .ok_or_else(|| position_overflow(SKIP))?;
        query.insert(LIMIT.to_owned(), json!(limits.page_size));
        query.insert(SKIP.to_owned(), json!(skip));
        Ok(())
    })
    .await
}

/// Fetches every page using `page`/`per_page`.
///
/// `page` starts at the value already in the query, or 1.
pub async fn fetch_all_page_per_page(
    service: &ApiService,
    request: ApiRequest,
    limits: PageLimits,
    extractor: &dyn ItemExtractor,
) -> DispatchResult<Vec<Value>> {
    let start = query_number(&request.query, PAGE).unwrap_or(1);
    fetch_all(service, request, limits, extractor, |query, index| {
        let page = start
            .checked_add(index)
            .ok_or_else(|| position_overflow(PAGE))?;
        query.insert(PER_PAGE.to_owned(), json!(limits.page_size));
        query.insert(PAGE.to_owned(), json!(page));
        Ok(())
    })
    .await
}

async fn fetch_all<F>(
    service: &ApiService,
    mut request: ApiRequest,
    limits: PageLimits,
    extractor: &dyn ItemExtractor,
    position: F,
) -> DispatchResult<Vec<Value>>
where
    F: Fn(&mut Map<String, Value>, u64) -> DispatchResult<()>,
{
    let page_size = limits.page_size as usize;
    let mut items = Vec::new();
    let mut index = 0;

    loop {
        position(&mut request.query, index)?;
        let response = service.send(&request).await?;
        let page = page_items(response, extractor);
        let received = page.len();
        items.extend(page);
        index += 1;

        tracing::trace!(
            target: TRACING_TARGET,
            endpoint = %request.endpoint,
            page = index,
            received,
            total = items.len(),
            "Fetched page"
        );

        if received < page_size {
            break;
        }

        if index >= u64::from(limits.max_pages) {
            tracing::warn!(
                target: TRACING_TARGET,
                endpoint = %request.endpoint,
                max_pages = limits.max_pages,
                "Pagination cap reached"
            );
            return Err(DispatchError::PaginationLimitExceeded {
                max_pages: limits.max_pages,
            });
        }
    }

    tracing::debug!(
        target: TRACING_TARGET,
        endpoint = %request.endpoint,
        pages = index,
        items = items.len(),
        "Pagination finished"
    );

    Ok(items)
}

fn position_overflow(name: &str) -> DispatchError {
    DispatchError::invalid_parameter(name, "page position exceeds the supported range")
}

fn query_number(query: &Map<String, Value>, key: &str) -> Option<u64> {
    match query.get(key)? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vodnode_catalog::HttpMethod;

    use super::*;
    use crate::mock::MockProvider;
    use crate::normalize::EnvelopeExtractor;
    use crate::provider::ErrorKind;

    const LIMITS: PageLimits = PageLimits {
        page_size: 50,
        max_pages: 1000,
    };

    fn descriptor(method: HttpMethod, pagination: PaginationMode) -> OperationDescriptor {
        OperationDescriptor::new("media", "getAll", method, "/media").with_pagination(pagination)
    }

    fn page(len: usize) -> Value {
        Value::Array((0..len).map(|i| json!({ "i": i })).collect())
    }

    #[test]
    fn test_select_table() {
        let get_ls = descriptor(HttpMethod::Get, PaginationMode::LimitSkip);
        let get_pp = descriptor(HttpMethod::Get, PaginationMode::PagePerPage);
        let get_none = descriptor(HttpMethod::Get, PaginationMode::None);
        let post_ls = descriptor(HttpMethod::Post, PaginationMode::LimitSkip);

        assert_eq!(
            PaginationPlan::select(&get_ls, true, 10, 50),
            PaginationPlan::AllLimitSkip { page_size: 50 }
        );
        assert_eq!(
            PaginationPlan::select(&get_ls, false, 10, 50),
            PaginationPlan::LimitSkip { limit: 10 }
        );
        assert_eq!(
            PaginationPlan::select(&get_pp, true, 10, 50),
            PaginationPlan::AllPagePerPage { page_size: 50 }
        );
        assert_eq!(
            PaginationPlan::select(&get_pp, false, 10, 50),
            PaginationPlan::PagePerPage { per_page: 10 }
        );
        assert_eq!(PaginationPlan::select(&get_none, true, 10, 50), PaginationPlan::Single);
        assert_eq!(PaginationPlan::select(&post_ls, true, 10, 50), PaginationPlan::Single);
    }

    #[test]
    fn test_apply_limit_skip_is_idempotent() {
        let plan = PaginationPlan::LimitSkip { limit: 10 };

        let mut first = Map::new();
        plan.apply(&mut first);
        assert_eq!(Value::Object(first.clone()), json!({"limit": 10, "skip": 0}));

        let mut second = Map::new();
        plan.apply(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_keeps_existing_position() {
        let mut query = json!({"skip": 20}).as_object().cloned().unwrap();
        PaginationPlan::LimitSkip { limit: 5 }.apply(&mut query);
        assert_eq!(Value::Object(query), json!({"limit": 5, "skip": 20}));

        let mut query = json!({"page": 3}).as_object().cloned().unwrap();
        PaginationPlan::PagePerPage { per_page: 5 }.apply(&mut query);
        assert_eq!(Value::Object(query), json!({"per_page": 5, "page": 3}));

        let mut query = Map::new();
        PaginationPlan::Single.apply(&mut query);
        assert!(query.is_empty());
    }

    #[tokio::test]
    async fn test_page_per_page_until_short_page() {
        let provider = MockProvider::new().with_responses([page(50), page(50), page(13)]);
        let service = provider.clone().into_service();
        let request = ApiRequest::new(HttpMethod::Get, "/playlists");

        let items = fetch_all_page_per_page(&service, request, LIMITS, &EnvelopeExtractor::default())
            .await
            .unwrap();

        assert_eq!(items.len(), 113);
        let pages: Vec<_> = provider
            .requests()
            .iter()
            .map(|request| (request.query[PAGE].clone(), request.query[PER_PAGE].clone()))
            .collect();
        assert_eq!(
            pages,
            [(json!(1), json!(50)), (json!(2), json!(50)), (json!(3), json!(50))]
        );
    }

    #[tokio::test]
    async fn test_limit_skip_from_existing_offset() {
        let provider = MockProvider::new().with_responses([
            json!({"data": page(50)}),
            json!({"data": []}),
        ]);
        let service = provider.clone().into_service();
        let request = ApiRequest::new(HttpMethod::Get, "/media")
            .with_query(json!({"skip": 100}).as_object().cloned().unwrap());

        let items = fetch_all_limit_skip(&service, request, LIMITS, &EnvelopeExtractor::default())
            .await
            .unwrap();

        assert_eq!(items.len(), 50);
        let skips: Vec<_> = provider
            .requests()
            .iter()
            .map(|request| request.query[SKIP].clone())
            .collect();
        assert_eq!(skips, [json!(100), json!(150)]);
    }

    #[tokio::test]
    async fn test_limit_skip_offset_overflow() {
        let provider = MockProvider::new().with_responses([page(50), page(50)]);
        let service = provider.clone().into_service();
        let request = ApiRequest::new(HttpMethod::Get, "/media")
            .with_query(json!({"skip": u64::MAX}).as_object().cloned().unwrap());

        let error = fetch_all_limit_skip(&service, request, LIMITS, &EnvelopeExtractor::default())
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            DispatchError::InvalidParameter { ref name, .. } if name == SKIP
        ));
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.requests()[0].query[SKIP], json!(u64::MAX));
    }

    #[tokio::test]
    async fn test_page_number_overflow() {
        let provider = MockProvider::new().with_responses([page(50), page(50)]);
        let service = provider.clone().into_service();
        let request = ApiRequest::new(HttpMethod::Get, "/playlists")
            .with_query(json!({"page": u64::MAX}).as_object().cloned().unwrap());

        let error =
            fetch_all_page_per_page(&service, request, LIMITS, &EnvelopeExtractor::default())
                .await
                .unwrap_err();

        assert!(matches!(
            error,
            DispatchError::InvalidParameter { ref name, .. } if name == PAGE
        ));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_page_cap() {
        let provider = MockProvider::new().with_responses([page(2), page(2), page(2)]);
        let service = provider.clone().into_service();
        let limits = PageLimits {
            page_size: 2,
            max_pages: 2,
        };

        let error = fetch_all_limit_skip(
            &service,
            ApiRequest::new(HttpMethod::Get, "/media"),
            limits,
            &EnvelopeExtractor::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, DispatchError::PaginationLimitExceeded { max_pages: 2 }));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_inside_loop_aborts() {
        let provider = MockProvider::new()
            .with_response(page(50))
            .with_status_error(500);
        let service = provider.clone().into_service();

        let error = fetch_all_page_per_page(
            &service,
            ApiRequest::new(HttpMethod::Get, "/players"),
            LIMITS,
            &EnvelopeExtractor::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            error,
            DispatchError::ApiCallFailed(ref source) if source.kind == ErrorKind::ExternalError
        ));
        assert_eq!(provider.call_count(), 2);
    }
}
