use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use super::dto::MissingFoodReport;

#[async_trait]
pub trait MissingFoodLog: Send + Sync {
    async fn append(&self, report: &MissingFoodReport, at: OffsetDateTime) -> anyhow::Result<()>;
}

/// Appends one `name,userId,timestamp` line per report to a local file.
#[derive(Debug, Clone)]
pub struct CsvMissingFoodLog {
    path: PathBuf,
}

impl CsvMissingFoodLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MissingFoodLog for CsvMissingFoodLog {
    async fn append(&self, report: &MissingFoodReport, at: OffsetDateTime) -> anyhow::Result<()> {
        let line = csv_line(report, at)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("open {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .await
            .with_context(|| format!("append to {}", self.path.display()))?;
        file.flush().await.context("flush missing-foods log")?;
        Ok(())
    }
}

fn csv_line(report: &MissingFoodReport, at: OffsetDateTime) -> anyhow::Result<String> {
    let ts = at.format(&Rfc3339).context("format report timestamp")?;
    Ok(format!(
        "{},{},{}\n",
        csv_field(&report.name),
        csv_field(&report.user_id),
        ts
    ))
}

fn csv_field(raw: &str) -> String {
    if raw.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
