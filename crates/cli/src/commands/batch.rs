use futures::stream::{self, StreamExt};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::di::UseCases;

/// Locate every non-empty line of `path`, `concurrency` at a time.
///
/// Lines run independently: duplicates may hit providers more than once, and
/// a failing line is reported without stopping the rest. Output is one JSON
/// object per line, in completion order.
pub async fn batch(use_cases: &UseCases, path: &Path, concurrency: usize) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(path).await?;
    let descriptions: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!(
        file = %path.display(),
        count = descriptions.len(),
        concurrency,
        "Starting batch"
    );

    let locate = Arc::clone(&use_cases.locate);
    let mut results = stream::iter(descriptions)
        .map(|description| {
            let locate = Arc::clone(&locate);
            async move {
                let outcome = locate.execute(&description).await;
                (description, outcome)
            }
        })
        .buffer_unordered(concurrency.max(1));

    let mut resolved = 0usize;
    let mut failed = 0usize;

    while let Some((description, outcome)) = results.next().await {
        let line = match outcome {
            Ok(located) => {
                if located.result.is_resolved() {
                    resolved += 1;
                }
                serde_json::to_value(&located)?
            }
            Err(e) => {
                failed += 1;
                warn!(error = %e, "Batch line failed");
                json!({ "description": description, "error": e.to_string() })
            }
        };
        println!("{}", serde_json::to_string(&line)?);
    }

    info!(resolved, failed, "Batch finished");
    Ok(())
}
