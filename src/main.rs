//! # Inkface CLI
//!
//! Command-line interface for rendering e-paper watchface previews.
//!
//! ## Usage
//!
//! ```bash
//! # Render one watchface using the fonts and positions from its header
//! inkface render faces/bird.h --fonts-dir fonts
//!
//! # Try a different font and position
//! inkface render faces/bird.h --font fonts/FreeSansBold20pt7b.h \
//!     --layout 1 --time-x -1 --time-y 5 --date-x 50 --date-y 90 -o test.png
//!
//! # Render with the current local time
//! inkface render faces/bird.h --fonts-dir fonts --now
//!
//! # Render many watchfaces in parallel
//! inkface batch faces/*.h --fonts-dir fonts --output-dir previews
//!
//! # Show a string's bounding box
//! inkface measure fonts/FreeSansBold20pt7b.h "6:24 AM"
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use inkface::{
    DisplayConfig, FaceConfig, InkfaceError,
    asset::FontTable,
    batch::{self, BatchJob},
    clock,
    face::{FaceAssets, render_face},
    layout::LayoutMode,
    metrics,
    render::{CropRegion, TextColor},
};

const DEFAULT_TIME: &str = "6:24 AM";
const DEFAULT_DATE: &str = "Oct 25";

/// Inkface - E-paper watchface preview renderer
#[derive(Parser, Debug)]
#[command(name = "inkface")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a single watchface preview to PNG
    Render {
        /// Watchface header (background bitmap and field assignments)
        face: PathBuf,

        /// Directory containing <FontName>.h headers (defaults to the face's directory)
        #[arg(long, value_name = "DIR")]
        fonts_dir: Option<PathBuf>,

        /// JSON config to use instead of the header's field assignments
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Font for both time and date
        #[arg(long, value_name = "FILE")]
        font: Option<PathBuf>,

        /// Font for the time
        #[arg(long, value_name = "FILE")]
        time_font: Option<PathBuf>,

        /// Font for the date
        #[arg(long, value_name = "FILE")]
        date_font: Option<PathBuf>,

        /// Layout: 0 = single line, 1 = two lines
        #[arg(long)]
        layout: Option<u8>,

        /// Time X position (percent 0-100, or -1 to center)
        #[arg(long, allow_negative_numbers = true)]
        time_x: Option<i32>,

        /// Time Y position (percent 0-100, or -1 to center)
        #[arg(long, allow_negative_numbers = true)]
        time_y: Option<i32>,

        /// Date X position (percent 0-100, or -1 to center)
        #[arg(long, allow_negative_numbers = true)]
        date_x: Option<i32>,

        /// Date Y position (percent 0-100, or -1 to center)
        #[arg(long, allow_negative_numbers = true)]
        date_y: Option<i32>,

        /// Time color: 0 = black, 1 = white
        #[arg(long)]
        time_color: Option<u8>,

        /// Date color: 0 = black, 1 = white
        #[arg(long)]
        date_color: Option<u8>,

        /// Background crop rectangle
        #[arg(long, value_name = "X0,Y0,X1,Y1", value_parser = parse_crop)]
        crop: Option<CropRegion>,

        /// Hide AM/PM
        #[arg(long)]
        no_ampm: bool,

        /// Time text to display
        #[arg(long)]
        time: Option<String>,

        /// Date text to display
        #[arg(long)]
        date: Option<String>,

        /// Use the current local time and date
        #[arg(long, conflicts_with_all = ["time", "date"])]
        now: bool,

        /// Output PNG path (defaults to <face>.png)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Render previews for many watchfaces in parallel
    Batch {
        /// Watchface headers
        #[arg(required = true)]
        faces: Vec<PathBuf>,

        /// Directory containing <FontName>.h headers
        #[arg(long, value_name = "DIR")]
        fonts_dir: PathBuf,

        /// Directory for the PNG files
        #[arg(long, short, default_value = "previews")]
        output_dir: PathBuf,

        /// Time text to display
        #[arg(long, default_value = DEFAULT_TIME)]
        time: String,

        /// Date text to display
        #[arg(long, default_value = "Jun 24")]
        date: String,

        /// Worker threads (defaults to one per core)
        #[arg(long, short)]
        jobs: Option<usize>,
    },

    /// Print the bounding box of a string
    Measure {
        /// Font header
        font: PathBuf,

        /// Text to measure
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), InkfaceError> {
    let display = DisplayConfig::GDEH0154D67;

    match command {
        Commands::Render {
            face,
            fonts_dir,
            config,
            font,
            time_font,
            date_font,
            layout,
            time_x,
            time_y,
            date_x,
            date_y,
            time_color,
            date_color,
            crop,
            no_ampm,
            time,
            date,
            now,
            output,
        } => {
            let mut face_config = match config {
                Some(path) => {
                    let mut c = FaceConfig::load_json(&path, &display)?;
                    c.bitmap = face.clone();
                    c
                }
                None => {
                    let fonts_dir = fonts_dir
                        .unwrap_or_else(|| face.parent().unwrap_or(Path::new(".")).to_path_buf());
                    FaceConfig::load_header(&face, &fonts_dir, &display)?
                }
            };

            // Explicit flags win over header or JSON values
            if let Some(f) = time_font.or_else(|| font.clone()) {
                face_config.time_font = Some(f);
            }
            if let Some(f) = date_font.or(font) {
                face_config.date_font = Some(f);
            }
            if let Some(l) = layout {
                face_config.layout = LayoutMode::try_from(l)?;
            }
            if let Some(v) = time_x {
                face_config.time_x = v;
            }
            if let Some(v) = time_y {
                face_config.time_y = v;
            }
            if let Some(v) = date_x {
                face_config.date_x = v;
            }
            if let Some(v) = date_y {
                face_config.date_y = v;
            }
            if let Some(c) = time_color {
                face_config.time_color = TextColor::try_from(c)?;
            }
            if let Some(c) = date_color {
                face_config.date_color = TextColor::try_from(c)?;
            }
            if let Some(c) = crop {
                face_config.crop = c;
            }
            if no_ampm {
                face_config.no_ampm = true;
            }

            let (time_text, date_text) = if now {
                let local = chrono::Local::now();
                (clock::format_time(&local, true), clock::format_date(&local))
            } else {
                (
                    time.unwrap_or_else(|| DEFAULT_TIME.to_string()),
                    date.unwrap_or_else(|| DEFAULT_DATE.to_string()),
                )
            };

            let output = output.unwrap_or_else(|| {
                let stem = face.file_stem().map(|s| s.to_string_lossy().into_owned());
                PathBuf::from(format!("{}.png", stem.as_deref().unwrap_or("watchface")))
            });

            let assets = FaceAssets::load(&face_config, &display)?;
            let canvas = render_face(&display, &assets, &face_config, &time_text, &date_text);
            canvas.save_png(&output)?;
            println!("Saved: {}", output.display());
        }

        Commands::Batch {
            faces,
            fonts_dir,
            output_dir,
            time,
            date,
            jobs,
        } => {
            if let Some(n) = jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build_global()
                    .map_err(|e| InkfaceError::Config(format!("cannot start {} workers: {}", n, e)))?;
            }
            std::fs::create_dir_all(&output_dir)?;

            println!("Generating previews for {} watchfaces...\n", faces.len());

            let batch_jobs: Vec<BatchJob> = faces
                .iter()
                .map(|f| BatchJob::new(f, &fonts_dir, &output_dir, &time, &date))
                .collect();
            let report = batch::render_batch(&display, &batch_jobs)?;

            for job in &batch_jobs {
                if report.succeeded.contains(&job.name) {
                    println!("✓ {}: {}", job.name, job.output.display());
                }
            }
            for (name, e) in &report.failed {
                println!("✗ {}: Error - {}", name, e);
            }
            println!(
                "\n{}/{} watchfaces rendered successfully",
                report.succeeded.len(),
                report.total()
            );
            println!("Output directory: {}/", output_dir.display());
        }

        Commands::Measure { font, text } => {
            let font = FontTable::load(&font, &display.font_defaults)?;
            let b = metrics::measure(&font, &text);
            println!("x1={} y1={} w={} h={}", b.min_x, b.min_y, b.width, b.height);
            println!("advance={}", metrics::advance_width(&font, &text));
        }
    }

    Ok(())
}

/// Parse `x0,y0,x1,y1` into a crop region.
fn parse_crop(s: &str) -> Result<CropRegion, String> {
    let parts: Vec<u32> = s
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid crop '{}': {}", s, e))?;
    match parts.as_slice() {
        &[x_start, y_start, x_end, y_end] => Ok(CropRegion {
            x_start,
            y_start,
            x_end,
            y_end,
        }),
        _ => Err(format!("crop needs 4 values x0,y0,x1,y1, got '{}'", s)),
    }
}
