//! Subcommand handlers. Each prints its result to stdout as JSON.

pub mod batch;
pub mod run;

pub use batch::batch;
pub use run::run;

use serde_json::json;
use tracing::info;

use crate::di::UseCases;

pub async fn locate(use_cases: &UseCases, description: &str) -> anyhow::Result<()> {
    let located = use_cases.locate.execute(description).await?;
    print_json(&serde_json::to_value(&located)?)
}

pub async fn geocode(use_cases: &UseCases, location_name: &str) -> anyhow::Result<()> {
    let resolution = use_cases.resolve.execute(location_name).await?;
    print_json(&serde_json::to_value(&resolution)?)
}

pub async fn extract(use_cases: &UseCases, text: &str) -> anyhow::Result<()> {
    let extracted = use_cases.extract.execute(text).await?;
    print_json(&json!({
        "description": text,
        "extracted": extracted,
        "found": extracted.is_found(),
    }))
}

pub async fn invalidate(use_cases: &UseCases, location_name: &str) -> anyhow::Result<()> {
    let key = use_cases.invalidate.execute(location_name).await?;
    info!(key = %key, "Cached geocode invalidated");
    print_json(&json!({ "invalidated": key }))
}

pub async fn sweep(use_cases: &UseCases) -> anyhow::Result<()> {
    let deleted = use_cases.sweep.execute().await;
    print_json(&json!({ "deleted": deleted }))
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
