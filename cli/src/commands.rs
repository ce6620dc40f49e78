// Command line definition and dispatch

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;
use ten_navigator_api_client::{ApiClient, ApiError};
use ten_navigator_core::{
    ApiConfig, ApiRequest, ConfigError, HttpMethod, InvestorMatchInput, PitchFeedbackRequest,
    ReputationInput, RiskInput, Tool, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Command line client for the TEN Navigator backend API
#[derive(Debug, Parser)]
#[command(name = "ten", version)]
pub struct Cli {
    /// Backend base URL; endpoints are appended to it verbatim
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// API key sent as X-API-Key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to <DIR>/ten.log
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Call an endpoint and print the JSON response
    Call {
        /// Path appended to the base URL (e.g. /api/v1/analyze-risk)
        endpoint: String,

        /// HTTP method
        #[arg(short = 'X', long, default_value = "POST")]
        method: HttpMethod,

        /// JSON payload (ignored for GET and DELETE)
        #[arg(short, long, conflicts_with = "data_file")]
        data: Option<String>,

        /// Read the JSON payload from a file
        #[arg(long, value_name = "PATH")]
        data_file: Option<PathBuf>,

        /// Extra header as "Name: value"; overrides the defaults
        #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// Run an analysis tool with a JSON input file
    Tool {
        /// Tool route name (e.g. analyze-risk, scan-reputation, buzz-builder)
        tool: Tool,

        /// JSON file with the request body
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,
    },

    /// Check that the backend is reachable
    Health,
}

/// Parse a `Name: value` header argument
pub fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {:?}", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name is empty in {:?}", raw));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

pub async fn run(cli: Cli) -> Result<()> {
    let client = build_client(&cli)?;

    match cli.command {
        Command::Call {
            endpoint,
            method,
            data,
            data_file,
            headers,
        } => {
            let mut request = ApiRequest::new(endpoint).method(method);
            if let Some(payload) = read_payload(data.as_deref(), data_file.as_deref())? {
                request = request.payload(payload);
            }
            for (name, value) in headers {
                request = request.header(name, value);
            }

            let body = client.call(&request).await?;
            print_json(&body)
        }
        Command::Tool { tool, input } => {
            let raw = fs::read_to_string(&input)
                .with_context(|| format!("cannot read {}", input.display()))?;
            let body = run_tool(&client, tool, &raw).await?;
            print_json(&body)
        }
        Command::Health => {
            let health = client.health().await?;
            println!("{}", health.message);
            Ok(())
        }
    }
}

fn build_client(cli: &Cli) -> Result<ApiClient> {
    let api_key = cli.api_key.clone().ok_or(ConfigError::MissingApiKey)?;
    let config = ApiConfig::new(cli.base_url.clone(), api_key)?;
    tracing::debug!(?config, "Using backend configuration");

    Ok(ApiClient::new(config)?)
}

/// Payload from `--data` or `--data-file`, if either was given
fn read_payload(data: Option<&str>, data_file: Option<&Path>) -> Result<Option<Value>> {
    let raw = match (data, data_file) {
        (Some(data), _) => data.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        (None, None) => return Ok(None),
    };

    let payload = serde_json::from_str(&raw).context("payload is not valid JSON")?;
    Ok(Some(payload))
}

/// Typed tools are validated and decoded; the rest are passed through as JSON
async fn run_tool(client: &ApiClient, tool: Tool, raw: &str) -> Result<Value> {
    let context = || format!("input is not a valid {} request", tool);

    let output = match tool {
        Tool::AnalyzeRisk => {
            let input: RiskInput = serde_json::from_str(raw).with_context(context)?;
            serde_json::to_value(client.analyze_risk(&input).await?)?
        }
        Tool::ScanReputation => {
            let input: ReputationInput = serde_json::from_str(raw).with_context(context)?;
            serde_json::to_value(client.scan_reputation(&input).await?)?
        }
        Tool::MatchInvestors => {
            let input: InvestorMatchInput = serde_json::from_str(raw).with_context(context)?;
            serde_json::to_value(client.match_investors(&input).await?)?
        }
        Tool::PitchFeedback => {
            let request: PitchFeedbackRequest = serde_json::from_str(raw).with_context(context)?;
            serde_json::to_value(client.pitch_feedback(&request).await?)?
        }
        other => {
            let payload: Value = serde_json::from_str(raw).with_context(context)?;
            client.run_tool(other, payload).await?
        }
    };

    Ok(output)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error to stderr, including status and body for HTTP errors
pub fn report_error(error: &anyhow::Error) {
    eprintln!("Error: {:#}", error);

    if let Some(ApiError::Http { status, data, .. }) = error.downcast_ref::<ApiError>() {
        eprintln!("Status: {}", status);
        if let Ok(body) = serde_json::to_string_pretty(data) {
            eprintln!("Response: {}", body);
        }
    }
}
