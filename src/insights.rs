//! Dataset summaries and trend analysis through an external text-completion
//! service.
//!
//! The service itself is injected through [`CompletionService`]; this module
//! only validates the request, renders the prompt, and checks that the reply
//! has the expected shape. There is no retry: one call per request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::data::model::DatasetRecord;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummaryRequest {
    /// Description of the dataset to summarize.
    pub dataset_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// A short summary of the dataset.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysisRequest {
    pub dataset_description: String,
    /// A sample of the dataset in CSV format; may be empty.
    #[serde(default)]
    pub dataset_sample: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub summary: String,
    pub insights: Vec<String>,
    pub recommendations: String,
}

// ---------------------------------------------------------------------------
// Completion service seam
// ---------------------------------------------------------------------------

/// What gets sent to the completion service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    /// Stable prompt identifier, for logs and routing.
    pub name: &'static str,
    pub prompt: String,
    /// JSON schema the reply must satisfy.
    pub output_schema: Value,
}

/// Failure reported by the remote service.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("completion service failed: {message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        RemoteError {
            message: message.into(),
        }
    }
}

/// A text-completion backend returning JSON shaped by the request's schema.
pub trait CompletionService {
    fn complete(&self, request: &CompletionRequest) -> Result<Value, RemoteError>;
}

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("reply for {prompt} does not match its schema")]
    InvalidOutput {
        prompt: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

const SUMMARY_PROMPT: &str = "generateDatasetSummaryPrompt";
const TRENDS_PROMPT: &str = "analyzeDatasetTrendsPrompt";

fn summary_prompt(req: &DatasetSummaryRequest) -> String {
    format!(
        "You are an AI assistant helping a busy executive understand datasets quickly.\n\n\
         Generate a concise summary of the following dataset description. \
         Focus on key findings and trends.\n\n\
         Dataset Description: {}\n",
        req.dataset_description
    )
}

fn trends_prompt(req: &TrendAnalysisRequest) -> String {
    let sample = if req.dataset_sample.trim().is_empty() {
        "No sample data provided.".to_string()
    } else {
        format!("```csv\n{}\n```", req.dataset_sample.trim_end())
    };
    format!(
        "You are an expert data analyst. Analyze the provided dataset description and sample \
         to identify complex trends and correlations. Provide a summary of your findings, \
         key insights, and recommendations.\n\n\
         Dataset Description: {}\n\
         Dataset Sample:\n{}\n\n\
         Ensure that the output is well-structured and easy to understand.",
        req.dataset_description, sample
    )
}

fn summary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string", "description": "A short summary of the dataset." }
        },
        "required": ["summary"]
    })
}

fn trends_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "A summary of the trends and correlations identified in the dataset."
            },
            "insights": {
                "type": "array",
                "items": { "type": "string" },
                "description": "A list of key insights from the analysis."
            },
            "recommendations": {
                "type": "string",
                "description": "Recommendations based on the identified trends and correlations."
            }
        },
        "required": ["summary", "insights", "recommendations"]
    })
}

// ---------------------------------------------------------------------------
// Flows
// ---------------------------------------------------------------------------

fn run<T: DeserializeOwned>(
    service: &dyn CompletionService,
    request: CompletionRequest,
) -> Result<T, InsightError> {
    log::info!("requesting completion for {}", request.name);
    let reply = service.complete(&request).map_err(|e| {
        log::error!("{} failed: {e}", request.name);
        e
    })?;
    serde_json::from_value(reply).map_err(|source| InsightError::InvalidOutput {
        prompt: request.name,
        source,
    })
}

/// Ask the service for a short executive summary of a dataset.
pub fn generate_dataset_summary(
    service: &dyn CompletionService,
    input: &DatasetSummaryRequest,
) -> Result<DatasetSummary, InsightError> {
    if input.dataset_description.trim().is_empty() {
        return Err(InsightError::InvalidInput("dataset description is empty"));
    }
    run(
        service,
        CompletionRequest {
            name: SUMMARY_PROMPT,
            prompt: summary_prompt(input),
            output_schema: summary_schema(),
        },
    )
}

/// Ask the service for trends, insights and recommendations.
pub fn analyze_dataset_trends(
    service: &dyn CompletionService,
    input: &TrendAnalysisRequest,
) -> Result<TrendAnalysis, InsightError> {
    if input.dataset_description.trim().is_empty() {
        return Err(InsightError::InvalidInput("dataset description is empty"));
    }
    run(
        service,
        CompletionRequest {
            name: TRENDS_PROMPT,
            prompt: trends_prompt(input),
            output_schema: trends_schema(),
        },
    )
}

/// One-line description of a dataset suitable as `datasetDescription`.
pub fn describe(record: &DatasetRecord) -> String {
    let mut text = format!(
        "{} ({} dataset, {}): {} records, {}",
        record.name, record.kind, record.status, record.records, record.size
    );
    if let Some(desc) = &record.description {
        text.push_str(". ");
        text.push_str(desc);
    }
    text
}

/// CSV text of the first `n` records, for use as `datasetSample`.
pub fn sample_csv(records: &[DatasetRecord], n: usize) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records.iter().take(n) {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(String::from_utf8(bytes)?)
}
