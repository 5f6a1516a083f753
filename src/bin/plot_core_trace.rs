//! Core trace timeline plot
//!
//! Reads a per-core task trace and writes it as an SVG timeline chart.

use clap::Parser;
use core_trace_plot::render::{RenderOptions, default_output_path, write_svg_file};
use core_trace_plot::trace::read_timeline;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "plot_core_trace",
    about = "Render a per-core task trace as an SVG timeline"
)]
struct Args {
    /// Trace file, one `<label>: [T1, T1, T2, ...]` line per core
    #[arg(default_value = "core_trace.txt")]
    input: PathBuf,

    /// Output SVG file (default: input with .svg extension, never the input itself)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chart title
    #[arg(long, default_value = core_trace_plot::render::DEFAULT_TITLE)]
    title: String,

    /// Disable tracing and summary output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let timeline = match read_timeline(&args.input) {
        Ok(timeline) => timeline,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };
    if timeline.is_empty() {
        println!("No valid lines found in input");
        return ExitCode::from(1);
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let opts = RenderOptions { title: args.title };
    if let Err(err) = write_svg_file(&timeline, &opts, &output) {
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }

    if !args.quiet {
        eprintln!(
            "wrote chart to {} (lanes={}, tasks={}, ticks={})",
            output.display(),
            timeline.len(),
            timeline.distinct_tasks().len(),
            timeline.max_ticks()
        );
    }
    ExitCode::SUCCESS
}

