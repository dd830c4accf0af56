//! Remotive job-search proxy — forwards search parameters and renames the
//! upstream's hyphenated fields to camelCase.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

const REMOTIVE_API_URL: &str = "https://remotive.com/api/remote-jobs";
const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    pub search: Option<String>,
    /// Accepted as an alias for `search`.
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub company_name: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RemotiveResponse {
    #[serde(default)]
    jobs: Vec<Value>,
    #[serde(rename = "job-count")]
    job_count: Option<u64>,
    #[serde(rename = "total-job-count")]
    total_job_count: Option<u64>,
    #[serde(rename = "00-warning")]
    warning: Option<String>,
    #[serde(rename = "0-legal-notice")]
    legal_notice: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResponse {
    pub jobs: Vec<Value>,
    pub job_count: u64,
    pub total_job_count: Option<u64>,
    pub warning: Option<String>,
    pub legal_notice: Option<String>,
    pub source_url: String,
}

/// GET /api/jobs
///
/// Pure pass-through: no caching, no filtering beyond what Remotive applies.
pub async fn handle_job_search(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let mut params: Vec<(&str, String)> = Vec::new();

    if let Some(search) = query.search.or(query.keyword) {
        params.push(("search", search));
    }
    if let Some(category) = query.category {
        params.push(("category", category));
    }
    if let Some(company_name) = query.company_name {
        params.push(("company_name", company_name));
    }
    params.push(("limit", query.limit.unwrap_or(DEFAULT_LIMIT).to_string()));

    let request = state
        .http
        .get(REMOTIVE_API_URL)
        .query(&params)
        .build()
        .map_err(|e| AppError::JobsUpstream(e.to_string()))?;
    let source_url = request.url().to_string();

    info!(url = %source_url, "Forwarding job search to Remotive");

    let data: RemotiveResponse = state
        .http
        .execute(request)
        .await
        .map_err(|e| AppError::JobsUpstream(e.to_string()))?
        .json()
        .await
        .map_err(|e| AppError::JobsUpstream(e.to_string()))?;

    Ok(Json(reshape(data, source_url)))
}

fn reshape(data: RemotiveResponse, source_url: String) -> JobSearchResponse {
    let job_count = data.job_count.unwrap_or(data.jobs.len() as u64);
    JobSearchResponse {
        jobs: data.jobs,
        job_count,
        total_job_count: data.total_job_count,
        warning: data.warning,
        legal_notice: data.legal_notice,
        source_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reshape_renames_hyphenated_upstream_fields() {
        let upstream = r#"{
            "00-warning": "test warning",
            "0-legal-notice": "legal text",
            "job-count": 2,
            "total-job-count": 1500,
            "jobs": [{"id": 1}, {"id": 2}]
        }"#;
        let data: RemotiveResponse = serde_json::from_str(upstream).unwrap();
        let reshaped = reshape(data, "https://example.test/q".to_string());

        assert_eq!(reshaped.job_count, 2);
        assert_eq!(reshaped.total_job_count, Some(1500));
        assert_eq!(reshaped.warning.as_deref(), Some("test warning"));
        assert_eq!(reshaped.legal_notice.as_deref(), Some("legal text"));
        assert_eq!(reshaped.source_url, "https://example.test/q");
    }

    #[test]
    fn test_reshape_defaults_job_count_to_jobs_length() {
        let data: RemotiveResponse =
            serde_json::from_value(json!({ "jobs": [{"id": 1}, {"id": 2}, {"id": 3}] })).unwrap();
        let reshaped = reshape(data, String::new());
        assert_eq!(reshaped.job_count, 3);
        assert_eq!(reshaped.total_job_count, None);
    }

    #[test]
    fn test_reshape_tolerates_missing_jobs_array() {
        let data: RemotiveResponse = serde_json::from_value(json!({})).unwrap();
        let reshaped = reshape(data, String::new());
        assert!(reshaped.jobs.is_empty());
        assert_eq!(reshaped.job_count, 0);
    }

    #[test]
    fn test_response_serializes_camel_case_with_nulls() {
        let data: RemotiveResponse = serde_json::from_value(json!({ "jobs": [] })).unwrap();
        let value = serde_json::to_value(reshape(data, "u".to_string())).unwrap();
        assert!(value["totalJobCount"].is_null());
        assert!(value["warning"].is_null());
        assert!(value["legalNotice"].is_null());
        assert_eq!(value["jobCount"], 0);
        assert_eq!(value["sourceUrl"], "u");
    }
}
