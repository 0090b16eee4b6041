//! The conversion run: directory setup, per-job conversion, completion banner.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::core::{
    ConversionJob, ConversionOutcome, ConversionResult, ConverterConfig, RunSummary, SkipReason,
    default_jobs,
};
use crate::processing::{Availability, Rasterizer, select_rasterizer, validate_job, validate_source_file};
use crate::utils::{ConverterError, ConverterResult, create_dir_all, file_exists, get_file_size};

use super::report::write_report;

/// Converts the asset table with one rasterizer.
pub struct Converter {
    assets_dir: PathBuf,
    jobs: Vec<ConversionJob>,
    rasterizer: Arc<dyn Rasterizer>,
    /// Destination of the human-readable status lines; stdout unless replaced
    out: Mutex<Box<dyn Write + Send>>,
}

impl Converter {
    /// Builds a converter for the default asset table under `config.assets_dir`.
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(
            &config.assets_dir,
            default_jobs(&config.assets_dir),
            select_rasterizer(config.backend),
        )
    }

    pub fn new(
        assets_dir: impl Into<PathBuf>,
        jobs: Vec<ConversionJob>,
        rasterizer: Arc<dyn Rasterizer>,
    ) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            jobs,
            rasterizer,
            out: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Sends status lines to `out` instead of stdout.
    pub fn with_output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Mutex::new(Box::new(out));
        self
    }

    /// Writes one status line. Console failures never fail a conversion.
    fn status(&self, line: fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn jobs(&self) -> &[ConversionJob] {
        &self.jobs
    }

    pub fn rasterizer_name(&self) -> &str {
        self.rasterizer.name()
    }

    /// Creates the assets directory and its parents. A no-op if it already exists.
    pub async fn ensure_output_directory(&self) -> ConverterResult<()> {
        create_dir_all(&self.assets_dir).await?;
        debug!("Output directory ready: {}", self.assets_dir.display());
        Ok(())
    }

    /// Converts one job.
    ///
    /// Returns `Ok(false)` when the rasterizer is unavailable; that is reported
    /// as a warning with manual-conversion guidance and is not an error.
    /// Rendering failures are returned as errors without retry or cleanup.
    pub async fn convert(&self, job: &ConversionJob) -> ConverterResult<bool> {
        validate_job(job)?;

        if let Availability::Unavailable { guidance } = self.rasterizer.availability() {
            warn!("Rasterizer '{}' unavailable, skipping {}", self.rasterizer.name(), job.source_name());
            self.status(format_args!("⚠️  {} not available. {}", self.rasterizer.name(), guidance));
            self.status(format_args!(
                "   Or manually convert {} to {}",
                job.source_path.display(),
                job.destination_path.display()
            ));
            return Ok(false);
        }

        validate_source_file(&job.source_path)?;

        let rasterizer = Arc::clone(&self.rasterizer);
        let source = job.source_path.clone();
        let destination = job.destination_path.clone();
        let size = job.dimensions();

        tokio::task::spawn_blocking(move || rasterizer.rasterize(&source, &destination, size))
            .await
            .map_err(|e| ConverterError::render(format!("Rasterizer task panicked: {e}")))??;

        info!("Converted {} at {}", job.source_name(), size);
        self.status(format_args!(
            "✅ Converted {} to {}",
            job.source_path.display(),
            job.destination_path.display()
        ));
        Ok(true)
    }

    /// Runs every job in order and prints the completion banner.
    ///
    /// Missing sources and an unavailable rasterizer are skips; the run still
    /// succeeds. The first rendering failure aborts the run.
    pub async fn run(&self) -> ConverterResult<RunSummary> {
        self.ensure_output_directory().await?;

        let mut summary = RunSummary::default();

        for job in &self.jobs {
            let outcome = if !file_exists(&job.source_path).await {
                debug!("Source missing: {}", job.source_path.display());
                self.status(format_args!("❌ {} not found", job.source_name()));
                ConversionOutcome::Skipped(SkipReason::SourceMissing)
            } else if self.convert(job).await? {
                ConversionOutcome::Converted
            } else {
                ConversionOutcome::Skipped(SkipReason::RasterizerUnavailable)
            };

            let output_size = match outcome {
                ConversionOutcome::Converted => Some(get_file_size(&job.destination_path).await?),
                ConversionOutcome::Skipped(_) => None,
            };

            summary.results.push(ConversionResult {
                name: job.source_name(),
                source_path: job.source_path.clone(),
                destination_path: job.destination_path.clone(),
                width: job.width,
                height: job.height,
                outcome,
                output_size,
            });
        }

        self.status(format_args!("\n🎨 Image Conversion Complete!"));
        self.status(format_args!("📱 You can now use either SVG or PNG images in your app"));

        info!(
            "Run finished: {} converted, {} skipped",
            summary.converted(),
            summary.skipped()
        );
        Ok(summary)
    }
}

/// Runs the default asset table with `config`, writing the JSON report if one is configured.
pub async fn run(config: &ConverterConfig) -> ConverterResult<RunSummary> {
    let converter = Converter::from_config(config);
    debug!(
        "Converting {} assets in {} with '{}'",
        converter.jobs().len(),
        converter.assets_dir().display(),
        converter.rasterizer_name()
    );

    let summary = converter.run().await?;

    if let Some(report_path) = &config.report_path {
        write_report(report_path, &converter, &summary).await?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, LOGO_SIZE, LOGO_STEM};
    use crate::processing::UnavailableRasterizer;
    use tempfile::tempdir;

    /// Cloneable in-memory console for asserting status lines.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writes a fixed byte string instead of rendering, and records each call.
    struct RecordingRasterizer {
        calls: Mutex<Vec<(PathBuf, Dimensions)>>,
    }

    impl RecordingRasterizer {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl Rasterizer for RecordingRasterizer {
        fn name(&self) -> &str {
            "recording"
        }

        fn availability(&self) -> Availability {
            Availability::Available
        }

        fn rasterize(&self, source: &Path, destination: &Path, size: Dimensions) -> ConverterResult<()> {
            self.calls.lock().unwrap().push((source.to_path_buf(), size));
            std::fs::write(destination, b"png")?;
            Ok(())
        }
    }

    /// Available, but every render fails.
    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn name(&self) -> &str {
            "failing"
        }

        fn availability(&self) -> Availability {
            Availability::Available
        }

        fn rasterize(&self, _source: &Path, _destination: &Path, _size: Dimensions) -> ConverterResult<()> {
            Err(ConverterError::render("corrupt svg"))
        }
    }

    fn write_sources(dir: &Path, stems: &[&str]) {
        std::fs::create_dir_all(dir).unwrap();
        for stem in stems {
            std::fs::write(dir.join(format!("{stem}.svg")), "<svg/>").unwrap();
        }
    }

    #[tokio::test]
    async fn test_convert_returns_false_when_unavailable() {
        let temp_dir = tempdir().unwrap();
        write_sources(temp_dir.path(), &["logo"]);
        let job = ConversionJob::for_asset(temp_dir.path(), LOGO_STEM, LOGO_SIZE);

        let converter = Converter::new(
            temp_dir.path(),
            vec![job.clone()],
            Arc::new(UnavailableRasterizer::new("stub", "install it")),
        );

        assert!(!converter.convert(&job).await.unwrap());
        assert!(!job.destination_path.exists());
    }

    #[tokio::test]
    async fn test_convert_passes_job_dimensions() {
        let temp_dir = tempdir().unwrap();
        write_sources(temp_dir.path(), &["logo"]);
        let job = ConversionJob::for_asset(temp_dir.path(), LOGO_STEM, LOGO_SIZE);
        let rasterizer = RecordingRasterizer::new();

        let converter = Converter::new(temp_dir.path(), vec![job.clone()], rasterizer.clone());

        assert!(converter.convert(&job).await.unwrap());
        let calls = rasterizer.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(job.source_path.clone(), LOGO_SIZE)]);
    }

    #[tokio::test]
    async fn test_run_skips_missing_source_and_continues() {
        let temp_dir = tempdir().unwrap();
        write_sources(temp_dir.path(), &["delivery_hero"]);
        let rasterizer = RecordingRasterizer::new();

        let converter = Converter::new(
            temp_dir.path(),
            default_jobs(temp_dir.path()),
            rasterizer.clone(),
        );
        let summary = converter.run().await.unwrap();

        assert_eq!(
            summary.results[0].outcome,
            ConversionOutcome::Skipped(SkipReason::SourceMissing)
        );
        assert_eq!(summary.results[1].outcome, ConversionOutcome::Converted);
        assert_eq!(summary.results[1].output_size, Some(3));
        assert_eq!(rasterizer.calls.lock().unwrap().len(), 1);
        assert!(!temp_dir.path().join("logo.png").exists());
    }

    #[tokio::test]
    async fn test_run_propagates_render_failure() {
        let temp_dir = tempdir().unwrap();
        write_sources(temp_dir.path(), &["logo", "delivery_hero"]);

        let converter = Converter::new(
            temp_dir.path(),
            default_jobs(temp_dir.path()),
            Arc::new(FailingRasterizer),
        );

        assert!(matches!(converter.run().await, Err(ConverterError::Render(_))));
    }

    #[tokio::test]
    async fn test_unavailable_rasterizer_warns_for_each_job() {
        let temp_dir = tempdir().unwrap();
        write_sources(temp_dir.path(), &["logo", "delivery_hero"]);
        let console = Captured::default();

        let converter = Converter::new(
            temp_dir.path(),
            default_jobs(temp_dir.path()),
            Arc::new(UnavailableRasterizer::new("none", "Rasterization is disabled")),
        )
        .with_output(console.clone());
        converter.run().await.unwrap();

        let lines = console.lines();
        let warnings = lines
            .iter()
            .filter(|l| l.as_str() == "⚠️  none not available. Rasterization is disabled")
            .count();
        assert_eq!(warnings, 2);

        for job in converter.jobs() {
            let manual = format!(
                "   Or manually convert {} to {}",
                job.source_path.display(),
                job.destination_path.display()
            );
            assert!(lines.contains(&manual), "missing line: {manual}");
        }
        assert!(!lines.iter().any(|l| l.starts_with("✅")));
    }

    #[tokio::test]
    async fn test_status_lines_for_missing_and_converted_jobs() {
        let temp_dir = tempdir().unwrap();
        write_sources(temp_dir.path(), &["delivery_hero"]);
        let console = Captured::default();

        let converter = Converter::new(
            temp_dir.path(),
            default_jobs(temp_dir.path()),
            RecordingRasterizer::new(),
        )
        .with_output(console.clone());
        converter.run().await.unwrap();

        let hero = &converter.jobs()[1];
        assert_eq!(
            console.lines(),
            vec![
                "❌ logo.svg not found".to_string(),
                format!(
                    "✅ Converted {} to {}",
                    hero.source_path.display(),
                    hero.destination_path.display()
                ),
                String::new(),
                "🎨 Image Conversion Complete!".to_string(),
                "📱 You can now use either SVG or PNG images in your app".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_render_failure_skips_the_banner() {
        let temp_dir = tempdir().unwrap();
        write_sources(temp_dir.path(), &["logo"]);
        let console = Captured::default();

        let converter = Converter::new(
            temp_dir.path(),
            default_jobs(temp_dir.path()),
            Arc::new(FailingRasterizer),
        )
        .with_output(console.clone());

        assert!(converter.run().await.is_err());
        assert!(console.lines().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_output_directory_creates_parents() {
        let temp_dir = tempdir().unwrap();
        let assets = temp_dir.path().join("assets").join("images");

        let converter = Converter::new(&assets, default_jobs(&assets), RecordingRasterizer::new());
        converter.ensure_output_directory().await.unwrap();
        converter.ensure_output_directory().await.unwrap();

        assert!(assets.is_dir());
    }
}
