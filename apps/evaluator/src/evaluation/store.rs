//! Artifact Store — writes prompts, records and reports for each candidate.
//!
//! Layout under the output directory, for candidate `N`:
//! `prompt_cvN.md`, `cvN.json`, `cvN_report.md`, `cvN_report.html`.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::AppError;
use crate::evaluation::assessment::AssessmentRecord;
use crate::evaluation::report::ReportFormat;

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    output_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn prompt_path(&self, cv_number: usize) -> PathBuf {
        self.output_dir.join(format!("prompt_cv{cv_number}.md"))
    }

    pub fn record_path(&self, cv_number: usize) -> PathBuf {
        self.output_dir.join(format!("cv{cv_number}.json"))
    }

    pub fn report_path(&self, cv_number: usize, format: ReportFormat) -> PathBuf {
        self.output_dir
            .join(format!("cv{cv_number}_report.{}", format.extension()))
    }

    pub async fn write_prompt(&self, cv_number: usize, prompt: &str) -> Result<PathBuf, AppError> {
        self.write(self.prompt_path(cv_number), prompt).await
    }

    /// Pretty-printed JSON, field order fixed by `AssessmentRecord`.
    pub async fn write_record(
        &self,
        cv_number: usize,
        record: &AssessmentRecord,
    ) -> Result<PathBuf, AppError> {
        let json = serde_json::to_string_pretty(record)?;
        self.write(self.record_path(cv_number), &json).await
    }

    pub async fn write_report(
        &self,
        cv_number: usize,
        format: ReportFormat,
        report: &str,
    ) -> Result<PathBuf, AppError> {
        self.write(self.report_path(cv_number, format), report).await
    }

    /// Removes a record left over from an earlier run. Missing files are fine.
    pub async fn discard_record(&self, cv_number: usize) -> Result<(), AppError> {
        match tokio::fs::remove_file(self.record_path(cv_number)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, path: PathBuf, contents: &str) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, contents).await?;
        debug!("Wrote {}", path.display());
        Ok(path)
    }
}
