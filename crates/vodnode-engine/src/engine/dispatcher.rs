//! Row-by-row operation dispatch.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use vodnode_catalog::Catalog;
use vodnode_catalog::params::{LIMIT, OPERATION, RESOURCE, RETURN_ALL, RETURN_FULL_RESPONSE};

use super::EngineConfig;
use super::report::{ExecutionReport, RowOutcome};
use crate::binder::{BoundParameters, bind};
use crate::error::{DispatchError, DispatchResult, RowError, RowStage};
use crate::normalize::{EnvelopeExtractor, ItemExtractor, normalize};
use crate::pagination::{PaginationPlan, fetch_all_limit_skip, fetch_all_page_per_page};
use crate::params::ParameterSource;
use crate::provider::{ApiRequest, ApiService};
use crate::template::substitute;

/// Tracing target for dispatch operations.
pub const TRACING_TARGET: &str = "vodnode_engine::dispatch";

/// Interprets catalog descriptors against input rows.
///
/// Rows are processed one after another with at most one request in flight.
/// A failing row never affects the others; every row gets its own outcome.
#[derive(Clone)]
pub struct Dispatcher<'c> {
    catalog: &'c Catalog,
    service: ApiService,
    extractor: Arc<dyn ItemExtractor>,
    config: EngineConfig,
}

impl fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("operations", &self.catalog.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Dispatcher<'static> {
    /// Creates a dispatcher over the builtin catalog.
    pub fn builtin(service: ApiService, config: EngineConfig) -> Self {
        Self::new(Catalog::builtin(), service, config)
    }
}

impl<'c> Dispatcher<'c> {
    /// Creates a dispatcher with the default envelope extractor.
    pub fn new(catalog: &'c Catalog, service: ApiService, config: EngineConfig) -> Self {
        tracing::info!(
            target: TRACING_TARGET,
            operations = catalog.len(),
            page_size = config.page_size,
            max_pages = config.max_pages,
            optional_segments = %config.optional_segments,
            "Dispatcher initialized"
        );

        Self {
            catalog,
            service,
            extractor: Arc::new(EnvelopeExtractor::default()),
            config,
        }
    }

    /// Replaces the list extractor.
    pub fn with_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ItemExtractor + 'static,
    {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Returns the dispatcher configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the catalog operations are resolved against.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Processes every row of `source` in order.
    pub async fn execute(&self, source: &dyn ParameterSource) -> ExecutionReport {
        let rows = source.row_count();
        let started_at = Instant::now();

        tracing::debug!(target: TRACING_TARGET, rows, "Starting batch");

        let mut report = ExecutionReport::with_capacity(rows);
        for row in 0..rows {
            report.push(self.process_row(source, row).await);
        }

        tracing::debug!(
            target: TRACING_TARGET,
            rows,
            failed = report.errors().count(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Batch completed"
        );

        report
    }

    /// Processes a single row.
    pub async fn process_row(&self, source: &dyn ParameterSource, row: usize) -> RowOutcome {
        let mut trace = RowTrace::new(row);

        match self.run_row(source, row, &mut trace).await {
            Ok(items) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    row,
                    resource = trace.resource.as_deref(),
                    operation = trace.operation.as_deref(),
                    items = items.len(),
                    "Row completed"
                );
                Ok(items)
            }
            Err(cause) => {
                let error = trace.fail(cause);
                tracing::warn!(
                    target: TRACING_TARGET,
                    row,
                    resource = error.resource.as_deref(),
                    operation = error.operation.as_deref(),
                    stage = %error.stage,
                    error = %error.source,
                    "Row failed"
                );
                Err(error)
            }
        }
    }

    async fn run_row(
        &self,
        source: &dyn ParameterSource,
        row: usize,
        trace: &mut RowTrace,
    ) -> DispatchResult<Vec<Value>> {
        let get = |name: &str| source.parameter(row, name);

        let resource = required_string(get(RESOURCE), RESOURCE)?;
        trace.resource = Some(resource.clone());
        let operation = required_string(get(OPERATION), OPERATION)?;
        trace.operation = Some(operation.clone());
        let descriptor = self.catalog.lookup(&resource, &operation)?;

        trace.stage = RowStage::BindParameters;
        let BoundParameters {
            path,
            mut query,
            body,
        } = bind(descriptor, &get);

        let (return_all, limit) = if descriptor.supports_pagination() {
            let return_all = optional_bool(get(RETURN_ALL), RETURN_ALL)?.unwrap_or(false);
            (return_all, self.read_limit(get(LIMIT))?)
        } else {
            (false, self.config.default_limit)
        };
        let full_response =
            optional_bool(get(RETURN_FULL_RESPONSE), RETURN_FULL_RESPONSE)?.unwrap_or(false);

        trace.stage = RowStage::SubstituteUrl;
        let endpoint = substitute(descriptor.path, &path, self.config.optional_segments)?;

        trace.stage = RowStage::Execute;
        let plan = PaginationPlan::select(descriptor, return_all, limit, self.config.page_size);
        plan.apply(&mut query);

        tracing::debug!(
            target: TRACING_TARGET,
            row,
            resource = %resource,
            operation = %operation,
            method = %descriptor.method,
            endpoint = %endpoint,
            plan = ?plan,
            "Dispatching operation"
        );

        let request = ApiRequest::new(descriptor.method, endpoint)
            .with_query(query)
            .with_body(body);
        let extractor = self.extractor.as_ref();

        let response = match plan {
            PaginationPlan::AllLimitSkip { .. } => Value::Array(
                fetch_all_limit_skip(&self.service, request, self.config.page_limits(), extractor)
                    .await?,
            ),
            PaginationPlan::AllPagePerPage { .. } => Value::Array(
                fetch_all_page_per_page(
                    &self.service,
                    request,
                    self.config.page_limits(),
                    extractor,
                )
                .await?,
            ),
            PaginationPlan::Single
            | PaginationPlan::LimitSkip { .. }
            | PaginationPlan::PagePerPage { .. } => self.service.send(&request).await?,
        };

        trace.stage = RowStage::Normalize;
        Ok(normalize(response, full_response, extractor))
    }

    fn read_limit(&self, value: Option<Value>) -> DispatchResult<u32> {
        let requested = match value {
            None | Some(Value::Null) => return Ok(self.config.default_limit),
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        match requested {
            Some(limit) if limit.is_finite() => Ok(self.config.clamp_limit(limit.max(0.0) as u64)),
            _ => Err(DispatchError::invalid_parameter(LIMIT, "expected a number")),
        }
    }
}

/// Progress of a row, kept for error reporting.
struct RowTrace {
    row: usize,
    resource: Option<String>,
    operation: Option<String>,
    stage: RowStage,
}

impl RowTrace {
    fn new(row: usize) -> Self {
        Self {
            row,
            resource: None,
            operation: None,
            stage: RowStage::ResolveOperation,
        }
    }

    fn fail(self, source: DispatchError) -> RowError {
        RowError {
            row: self.row,
            resource: self.resource,
            operation: self.operation,
            stage: self.stage,
            source,
        }
    }
}

fn required_string(value: Option<Value>, name: &str) -> DispatchResult<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        None | Some(Value::Null) => Err(DispatchError::invalid_parameter(name, "missing")),
        Some(Value::String(_)) => Err(DispatchError::invalid_parameter(name, "empty")),
        Some(_) => Err(DispatchError::invalid_parameter(name, "expected a string")),
    }
}

fn optional_bool(value: Option<Value>, name: &str) -> DispatchResult<Option<bool>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(flag)),
        Some(Value::String(text)) => match text.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(DispatchError::invalid_parameter(name, "expected a boolean")),
        },
        Some(_) => Err(DispatchError::invalid_parameter(name, "expected a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vodnode_catalog::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

    use super::*;
    use crate::mock::MockProvider;
    use crate::params::JsonRows;
    use crate::provider::ErrorKind;
    use crate::template::OptionalSegments;

    const XY: &[ParamBinding] = &[ParamBinding::id("x", "x"), ParamBinding::id("y", "y")];

    fn rows(value: Value) -> JsonRows {
        serde_json::from_value(value).unwrap()
    }

    fn page(len: usize) -> Value {
        Value::Array((0..len).map(|i| json!({ "i": i })).collect())
    }

    fn stub_catalog() -> Catalog {
        Catalog::from_descriptors([
            OperationDescriptor::new("stub", "get", HttpMethod::Get, "/a/{x}/b/{y}")
                .with_path_params(XY),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_substitutes_path_and_sends_once() {
        let catalog = stub_catalog();
        let provider = MockProvider::new().with_response(json!({"ok": true}));
        let dispatcher =
            Dispatcher::new(&catalog, provider.clone().into_service(), EngineConfig::default());

        let report = dispatcher
            .execute(&rows(json!({"resource": "stub", "operation": "get", "x": "1", "y": "two words"})))
            .await;

        assert!(report.is_success());
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint, "/a/1/b/two%20words");
        assert!(requests[0].query.is_empty());
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_missing_path_parameter_sends_nothing() {
        let catalog = stub_catalog();
        let provider = MockProvider::new();
        let dispatcher =
            Dispatcher::new(&catalog, provider.clone().into_service(), EngineConfig::default());

        let error = dispatcher
            .process_row(&rows(json!({"resource": "stub", "operation": "get", "x": "1"})), 0)
            .await
            .unwrap_err();

        assert_eq!(error.stage, RowStage::SubstituteUrl);
        assert!(matches!(error.source, DispatchError::MissingPathParameter(ref name) if name == "y"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_limit_skip_single_page_query_is_stable() {
        let provider = MockProvider::new();
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());
        let input = rows(json!([
            {"resource": "media", "operation": "getAll", "returnAll": false, "limit": 10},
            {"resource": "media", "operation": "getAll", "returnAll": false, "limit": 10},
        ]));

        let report = dispatcher.execute(&input).await;

        assert!(report.is_success());
        let requests = provider.requests();
        assert_eq!(Value::Object(requests[0].query.clone()), json!({"limit": 10, "skip": 0}));
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn test_limit_defaults_and_clamps() {
        let provider = MockProvider::new();
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());
        let input = rows(json!([
            {"resource": "playlist", "operation": "getAll"},
            {"resource": "playlist", "operation": "getAll", "limit": 5000},
            {"resource": "playlist", "operation": "getAll", "limit": "7"},
        ]));

        dispatcher.execute(&input).await;

        let per_page: Vec<_> = provider
            .requests()
            .iter()
            .map(|request| request.query["per_page"].clone())
            .collect();
        assert_eq!(per_page, [json!(50), json!(100), json!(7)]);
    }

    #[tokio::test]
    async fn test_page_per_page_return_all() {
        let provider = MockProvider::new().with_responses([page(50), page(50), page(13)]);
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());

        let report = dispatcher
            .execute(&rows(json!({"resource": "player", "operation": "getAll", "returnAll": true})))
            .await;

        assert_eq!(report.items().len(), 113);
        let pages: Vec<_> = provider
            .requests()
            .iter()
            .map(|request| request.query["page"].clone())
            .collect();
        assert_eq!(pages, [json!(1), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn test_non_get_ignores_pagination_controls() {
        let provider = MockProvider::new().with_response(json!({"id": "c1", "name": "News"}));
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());

        let report = dispatcher
            .execute(&rows(json!({
                "resource": "channel",
                "operation": "create",
                "name": "News",
                "returnAll": "garbage",
                "additionalFields": {"body_description": "Daily"},
            })))
            .await;

        assert!(report.is_success());
        let requests = provider.requests();
        let request = &requests[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.endpoint, "/channels");
        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(json!({"name": "News", "description": "Daily"})));
        assert_eq!(report.items()[0].json, json!({"id": "c1", "name": "News"}));
    }

    #[tokio::test]
    async fn test_verbatim_body_field() {
        let provider = MockProvider::new().with_response(json!({"data": [{"id": 1}]}));
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());

        let report = dispatcher
            .execute(&rows(json!({
                "resource": "media",
                "operation": "search",
                "queryJson": {"text": "cats", "tags": ["a"]},
            })))
            .await;

        assert_eq!(
            provider.requests()[0].body,
            Some(json!({"text": "cats", "tags": ["a"]}))
        );
        assert_eq!(report.items()[0].json, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_full_response_and_arrays() {
        let provider = MockProvider::new()
            .with_response(json!([{"id": 1}, {"id": 2}, {"id": 3}]))
            .with_response(json!({"data": [{"id": 1}], "total": 1}));
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());

        let report = dispatcher
            .execute(&rows(json!([
                {"resource": "folder", "operation": "get", "folderId": "f1", "returnFullResponse": true},
                {"resource": "folder", "operation": "get", "folderId": "f1", "returnFullResponse": true},
            ])))
            .await;

        let outcomes = report.outcomes();
        assert_eq!(outcomes[0].as_ref().unwrap().len(), 3);
        assert_eq!(
            outcomes[1].as_ref().unwrap(),
            &vec![json!({"data": [{"id": 1}], "total": 1})]
        );
    }

    #[tokio::test]
    async fn test_failed_row_leaves_others_intact() {
        let provider = MockProvider::new()
            .with_response(json!({"id": "a"}))
            .with_response(json!({"id": "c"}));
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());

        let report = dispatcher
            .execute(&rows(json!([
                {"resource": "media", "operation": "get", "mediaId": "a"},
                {"resource": "media", "operation": "explode"},
                {"resource": "media", "operation": "get", "mediaId": "c"},
            ])))
            .await;

        let items = report.items();
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].paired_item.item, items[1].paired_item.item), (0, 2));
        assert_eq!(items[1].json, json!({"id": "c"}));

        let error = report.errors().next().unwrap();
        assert_eq!(error.row, 1);
        assert_eq!(error.stage, RowStage::ResolveOperation);
        assert_eq!(error.operation.as_deref(), Some("explode"));
        assert!(matches!(error.source, DispatchError::OperationNotFound(_)));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_is_api_call_failed() {
        let provider = MockProvider::new().with_status_error(404);
        let dispatcher = Dispatcher::builtin(provider.into_service(), EngineConfig::default());

        let error = dispatcher
            .process_row(&rows(json!({"resource": "media", "operation": "get", "mediaId": "m"})), 0)
            .await
            .unwrap_err();

        assert_eq!(error.stage, RowStage::Execute);
        assert!(error.is_api_failure());
        assert!(matches!(
            error.source,
            DispatchError::ApiCallFailed(ref source) if source.kind == ErrorKind::NotFound
        ));
    }

    #[tokio::test]
    async fn test_invalid_control_parameters() {
        let dispatcher =
            Dispatcher::builtin(MockProvider::new().into_service(), EngineConfig::default());
        let input = rows(json!([
            {"operation": "get"},
            {"resource": 3, "operation": "get"},
            {"resource": "media", "operation": "getAll", "limit": {"n": 1}},
            {"resource": "media", "operation": "getAll", "returnAll": 1},
        ]));

        let report = dispatcher.execute(&input).await;
        let failures: Vec<_> = report
            .errors()
            .map(|error| match &error.source {
                DispatchError::InvalidParameter { name, .. } => (name.as_str(), error.stage),
                other => panic!("unexpected error {other}"),
            })
            .collect();

        assert_eq!(
            failures,
            [
                (RESOURCE, RowStage::ResolveOperation),
                (RESOURCE, RowStage::ResolveOperation),
                (LIMIT, RowStage::BindParameters),
                (RETURN_ALL, RowStage::BindParameters),
            ]
        );
    }

    #[tokio::test]
    async fn test_optional_segment_policy() {
        let input = rows(json!({"resource": "media", "operation": "getFile", "mediaId": "m1"}));

        let provider = MockProvider::new();
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());
        let error = dispatcher.process_row(&input, 0).await.unwrap_err();
        assert!(matches!(error.source, DispatchError::MissingPathParameter(_)));

        let config = EngineConfig::builder()
            .optional_segments(OptionalSegments::Omit)
            .build()
            .unwrap();
        let dispatcher = Dispatcher::builtin(provider.clone().into_service(), config);
        dispatcher.process_row(&input, 0).await.unwrap();
        assert_eq!(provider.requests()[0].endpoint, "/media/m1/files");
    }

    #[tokio::test]
    async fn test_pagination_cap_reported() {
        let provider = MockProvider::new().with_responses([page(2), page(2)]);
        let config = EngineConfig::builder()
            .page_size(2u32)
            .max_pages(2u32)
            .default_limit(2u32)
            .build()
            .unwrap();
        let dispatcher = Dispatcher::builtin(provider.into_service(), config);

        let error = dispatcher
            .process_row(&rows(json!({"resource": "category", "operation": "getAll", "returnAll": true})), 0)
            .await
            .unwrap_err();

        assert!(matches!(error.source, DispatchError::PaginationLimitExceeded { max_pages: 2 }));
    }

    #[tokio::test]
    async fn test_offset_overflow_fails_only_its_row() {
        let provider = MockProvider::new().with_responses([page(50), page(50)]);
        let dispatcher =
            Dispatcher::builtin(provider.clone().into_service(), EngineConfig::default());

        let report = dispatcher
            .execute(&rows(json!([
                {
                    "resource": "media",
                    "operation": "getAll",
                    "returnAll": true,
                    "filters": {"query_skip": u64::MAX},
                },
                {"resource": "media", "operation": "getAll"},
            ])))
            .await;

        assert_eq!(report.len(), 2);
        let error = report.errors().next().unwrap();
        assert_eq!((error.row, error.stage), (0, RowStage::Execute));
        assert!(matches!(
            error.source,
            DispatchError::InvalidParameter { ref name, .. } if name == "skip"
        ));

        let items = report.items();
        assert_eq!(items.len(), 50);
        assert!(items.iter().all(|item| item.paired_item.item == 1));
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_uses_pagination_mode_of_builtin() {
        let descriptor = Catalog::builtin().lookup("category", "getAll").unwrap();
        assert_eq!(descriptor.pagination, PaginationMode::LimitSkip);
    }
}
