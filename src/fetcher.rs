use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Known public recipe datasets usable as raw corpus input.
const SOURCES: &[(&str, &str)] = &[
    (
        "gitlab_recipes",
        "https://gitlab.com/datasets/json/recipes/-/raw/master/recipes.json",
    ),
    (
        "forkgasm",
        "https://raw.githubusercontent.com/LeaVerou/forkgasm/master/recipes.json",
    ),
    ("dummyjson", "https://dummyjson.com/recipes?limit=0"),
];

/// Downloads each known raw dataset to `<out_dir>/raw_<name>.json`.
/// A failed source is logged and skipped; the remaining sources still run.
pub async fn fetch_raw_datasets(out_dir: impl AsRef<Path>) -> Result<()> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("failed to create directory {}", out_dir.display()))?;

    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0")
        .build()
        .context("failed to build http client")?;

    for (name, url) in SOURCES {
        tracing::info!(source = name, url, "downloading dataset");
        match fetch_one(&client, url).await {
            Ok(bytes) => {
                let path = out_dir.join(format!("raw_{name}.json"));
                fs::write(&path, &bytes)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(source = name, bytes = bytes.len(), "download ok");
            }
            Err(e) => {
                tracing::error!(source = name, error = %format!("{e:#}"), "download failed");
            }
        }
    }

    Ok(())
}

async fn fetch_one(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let res = client.get(url).send().await?.error_for_status()?;
    let body = res.bytes().await?;
    Ok(body.to_vec())
}
