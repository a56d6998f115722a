//! # Batch Rendering
//!
//! Renders many watchface previews in parallel on the rayon thread pool.
//! Each job reads its own header and fonts and writes its own PNG, so jobs
//! share nothing; a job that fails (missing font, unreadable header) is
//! reported and the rest carry on.
//!
//! ```no_run
//! use inkface::batch::{BatchJob, render_batch};
//! use inkface::display::DisplayConfig;
//!
//! let jobs = vec![BatchJob::new("faces/bird.h", "fonts", "previews", "6:24 AM", "Jun 24")];
//! let report = render_batch(&DisplayConfig::GDEH0154D67, &jobs)?;
//! println!("{}/{} rendered", report.succeeded.len(), report.total());
//! # Ok::<(), inkface::error::InkfaceError>(())
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::display::DisplayConfig;
use crate::error::InkfaceError;
use crate::face::{FaceConfig, render_face_to_file};

/// One watchface preview to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    /// Name used in reports (the header's file stem)
    pub name: String,
    /// Watchface header: background bitmap plus field assignments
    pub face: PathBuf,
    /// Directory holding `<FontName>.h` headers
    pub fonts_dir: PathBuf,
    pub time: String,
    pub date: String,
    pub output: PathBuf,
}

impl BatchJob {
    /// Job writing `<output_dir>/<face stem>.png`.
    pub fn new(
        face: impl Into<PathBuf>,
        fonts_dir: impl Into<PathBuf>,
        output_dir: impl AsRef<Path>,
        time: &str,
        date: &str,
    ) -> Self {
        let face = face.into();
        let name = face
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| face.display().to_string());
        let output = output_dir.as_ref().join(format!("{}.png", name));
        Self {
            name,
            face,
            fonts_dir: fonts_dir.into(),
            time: time.to_string(),
            date: date.to_string(),
            output,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Names of jobs that produced a PNG, in job order
    pub succeeded: Vec<String>,
    /// Names and errors of jobs that did not, in job order
    pub failed: Vec<(String, InkfaceError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Render every job. Fails up front only if two jobs share an output path.
pub fn render_batch(display: &DisplayConfig, jobs: &[BatchJob]) -> Result<BatchReport, InkfaceError> {
    let mut outputs = HashSet::new();
    for job in jobs {
        if !outputs.insert(job.output.as_path()) {
            return Err(InkfaceError::Config(format!(
                "two jobs write {}",
                job.output.display()
            )));
        }
    }

    let results: Vec<(String, Result<(), InkfaceError>)> = jobs
        .par_iter()
        .map(|job| (job.name.clone(), render_job(display, job)))
        .collect();

    let mut report = BatchReport::default();
    for (name, result) in results {
        match result {
            Ok(()) => report.succeeded.push(name),
            Err(e) => {
                warn!("{}: {}", name, e);
                report.failed.push((name, e));
            }
        }
    }

    info!(
        "{}/{} watchfaces rendered successfully",
        report.succeeded.len(),
        report.total()
    );
    Ok(report)
}

fn render_job(display: &DisplayConfig, job: &BatchJob) -> Result<(), InkfaceError> {
    let config = FaceConfig::load_header(&job.face, &job.fonts_dir, display)?;
    render_face_to_file(display, &config, &job.time, &job.date, &job.output)?;
    Ok(())
}
