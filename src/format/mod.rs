//! Detail payload assembly with size-controlled content filtering.

pub(crate) mod body;
pub(crate) mod description;

pub use body::BodyStyle;
pub use description::DescriptionStyle;

use crate::error::SearchError;
use crate::search::SearchIndex;
use crate::spec::model::{EndpointRecord, HttpMethod, ParameterRecord};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

use body::{filter_body, filter_responses};
use description::filter_description;

/// Content-filtering choices for one detail request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailOptions {
    pub description_style: DescriptionStyle,
    pub request_body_style: BodyStyle,
    pub response_body_style: BodyStyle,
    /// 1-indexed inclusive bounds for `DescriptionStyle::LineRange`.
    pub line_start: Option<usize>,
    pub line_end: Option<usize>,
}

/// Size-controlled detail payload for one endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDetail {
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<ParameterRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Value>,
    pub deprecated: bool,
    pub sample_languages: Vec<String>,
}

/// Resolves an endpoint by `operation_id` or `(path, method)`.
///
/// When both are supplied and disagree, `operation_id` wins: it is the
/// unambiguous key. A failed lookup returns `NotFound` with the
/// nearest-matching operation ids as suggestions.
pub fn resolve<'a>(
    index: &'a SearchIndex,
    path: Option<&str>,
    method: Option<&str>,
    operation_id: Option<&str>,
) -> Result<&'a EndpointRecord, SearchError> {
    if let Some(operation_id) = operation_id.map(str::trim).filter(|s| !s.is_empty()) {
        return index
            .endpoint_by_operation_id(operation_id)
            .ok_or_else(|| SearchError::NotFound {
                identifier: operation_id.to_string(),
                suggestions: index.nearest_operation_ids(operation_id, 5),
            });
    }

    match (path, method) {
        (Some(path), Some(method_str)) => {
            let identifier = format!("{} {}", method_str.to_uppercase(), path);
            let method = HttpMethod::from_str(method_str).map_err(|()| SearchError::NotFound {
                identifier: identifier.clone(),
                suggestions: index.nearest_operation_ids(path, 5),
            })?;
            index
                .endpoint_by_key(path, method)
                .ok_or_else(|| SearchError::NotFound {
                    identifier,
                    suggestions: index.nearest_operation_ids(path, 5),
                })
        }
        _ => Err(SearchError::MissingIdentifier),
    }
}

/// Applies content filtering and produces the detail payload.
pub fn format_detail(record: &EndpointRecord, options: &DetailOptions) -> EndpointDetail {
    EndpointDetail {
        path: record.path.clone(),
        method: record.method,
        operation_id: record.operation_id.clone(),
        summary: record.summary.clone(),
        description: filter_description(
            &record.description,
            options.description_style,
            options.line_start,
            options.line_end,
        ),
        tags: record.tags.clone(),
        parameters: record.parameters.clone(),
        request_body: filter_body(record.request_body.as_ref(), options.request_body_style),
        responses: filter_responses(&record.responses, options.response_body_style),
        deprecated: record.deprecated,
        sample_languages: record.sample_languages(),
    }
}
