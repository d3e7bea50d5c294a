use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use log::info;

use fingerspell::io::{load_params, FrameRecording, PracticeConfig, PracticeReport};
use fingerspell::letters::reference_pose;
use fingerspell::{ClassificationResult, FramePipeline, Letter};

#[cfg(feature = "tracing")]
use tracing_log::LogTracer;

/// Check recorded hand landmarks against the manual alphabet.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every frame of a recording against one letter
    Classify {
        /// Recording JSON: {"frames": [[{x, y, z}, ...] | null, ...]}
        #[arg(long)]
        frames: PathBuf,
        /// Target letter A-Z
        #[arg(short, long)]
        letter: Letter,
        /// Classifier thresholds JSON
        #[arg(long)]
        params: Option<PathBuf>,
        /// Write a JSON report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Run a practice config and write its report
    Run {
        config: PathBuf,
    },
    /// Print the full rule breakdown for one frame
    Inspect {
        #[arg(long)]
        frames: PathBuf,
        #[arg(short, long)]
        letter: Letter,
        /// Frame index
        #[arg(long, default_value_t = 0)]
        frame: usize,
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// Write a one-frame recording of a letter's reference handshape
    Synth {
        #[arg(short, long)]
        letter: Letter,
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Classify {
            frames,
            letter,
            params,
            report,
        } => {
            let pipeline = build_pipeline(params.as_deref())?;
            let report_data = classify(&pipeline, &frames, letter)?;
            if let Some(path) = report {
                report_data.write_json(&path)?;
                info!("wrote report to {}", path.display());
            }
        }
        Command::Run { config } => {
            let cfg = PracticeConfig::load_json(&config)?;
            let frames = cfg.resolve_frames_path(&config);
            let report = classify(&cfg.build_pipeline(), &frames, cfg.letter)?;
            let output = cfg.output_path();
            report.write_json(&output)?;
            println!("wrote report to {}", output.display());
        }
        Command::Inspect {
            frames,
            letter,
            frame,
            params,
        } => {
            let pipeline = build_pipeline(params.as_deref())?;
            inspect(&pipeline, &frames, letter, frame)?;
        }
        Command::Synth { letter, output } => {
            let recording = FrameRecording::from_hands([Some(reference_pose(letter)?)]);
            match output {
                Some(path) => {
                    recording.write_json(&path)?;
                    info!("wrote reference {letter} to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&recording)?),
            }
        }
    }

    Ok(())
}

fn build_pipeline(params: Option<&Path>) -> Result<FramePipeline, Box<dyn std::error::Error>> {
    let params = match params {
        Some(path) => load_params(path)?,
        None => Default::default(),
    };
    Ok(FramePipeline::new(params))
}

fn classify(
    pipeline: &FramePipeline,
    frames: &Path,
    letter: Letter,
) -> Result<PracticeReport, Box<dyn std::error::Error>> {
    let recording = FrameRecording::load_json(frames)?;
    info!("classifying {} frames against {letter}", recording.len());

    let results = pipeline.process_frames(recording.iter(), letter);
    for (n, result) in results.iter().enumerate() {
        println!("frame {n}: {result}");
    }

    let report = PracticeReport::from_results(frames.to_string_lossy(), letter, results);
    println!(
        "{letter}: {} correct, {} incorrect, {} waiting",
        report.correct, report.incorrect, report.waiting
    );
    Ok(report)
}

fn inspect(
    pipeline: &FramePipeline,
    frames: &Path,
    letter: Letter,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let recording = FrameRecording::load_json(frames)?;
    if index >= recording.len() {
        return Err(format!("frame {index} out of range ({} frames)", recording.len()).into());
    }
    match recording.frame(index) {
        Some(raw) if !raw.is_empty() => match pipeline.evaluate(raw, letter) {
            Ok(eval) => println!("{}", serde_json::to_string_pretty(&eval)?),
            Err(err) => println!("frame {index}: {} ({err})", ClassificationResult::Waiting),
        },
        _ => println!("frame {index}: {} (no hand)", ClassificationResult::Waiting),
    }
    Ok(())
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: u8) {
    let _ = fingerspell::core::init_with_level(fingerspell::core::verbosity_level(verbose));
}

/// `RUST_LOG`, when set, overrides `-v`.
#[cfg(feature = "tracing")]
fn init_logging(verbose: u8) {
    let _ = LogTracer::init();
    fingerspell::core::init_tracing(false, fingerspell::core::verbosity_level(verbose));
}
