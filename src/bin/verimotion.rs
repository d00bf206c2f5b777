//! Verimotion CLI - Command-line interface for the scoring engine
//!
//! Commands:
//! - score: Score a challenge session JSON and emit the verdict payload
//! - validate: Check that a challenge session JSON parses and validates

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use verimotion::session::{parse_session, validate_session};
use verimotion::{evaluate, VerificationEngine, ENGINE_VERSION};

/// Verimotion - Behavioral scoring engine for human verification challenges
#[derive(Parser)]
#[command(name = "verimotion")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score human verification challenge sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a challenge session and emit the verdict payload
    Score {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Producer instance ID to stamp into the payload
        #[arg(long)]
        instance_id: Option<String>,

        /// Print only the verdict summary instead of the full payload
        #[arg(long)]
        summary: bool,
    },

    /// Validate a challenge session JSON without scoring it
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Score {
            input,
            output,
            instance_id,
            summary,
        } => {
            let session_json = read_input(&input)?;

            if summary {
                let session = parse_session(&session_json).map_err(|e| e.to_string())?;
                validate_session(&session).map_err(|e| e.to_string())?;
                let outcome = evaluate(&session);
                let verdict = if outcome.verdict.is_human { "human" } else { "bot" };
                let mut text = format!(
                    "{}: {} (confidence {})\n",
                    session.session_id, verdict, outcome.verdict.confidence
                );
                for reason in &outcome.verdict.reasons {
                    text.push_str(&format!("  - {}\n", reason));
                }
                write_output(&output, &text)
            } else {
                let engine = match instance_id {
                    Some(id) => VerificationEngine::with_instance_id(id),
                    None => VerificationEngine::new(),
                };
                let payload_json = engine.process(&session_json).map_err(|e| e.to_string())?;
                write_output(&output, &format!("{}\n", payload_json))
            }
        }

        Commands::Validate { input } => {
            let session_json = read_input(&input)?;
            let session = parse_session(&session_json).map_err(|e| e.to_string())?;
            validate_session(&session).map_err(|e| e.to_string())?;
            println!(
                "ok: session {} ({} samples, tier {})",
                session.session_id,
                session.samples.len(),
                session.complexity_tier
            );
            Ok(())
        }
    }
}

fn read_input(path: &Path) -> Result<String, String> {
    if path.to_str() == Some("-") {
        if atty::is(atty::Stream::Stdin) {
            return Err("refusing to read session JSON from an interactive terminal; pipe input or pass --input".to_string());
        }
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
    }
}

fn write_output(path: &Path, content: &str) -> Result<(), String> {
    if path.to_str() == Some("-") {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| format!("failed to write stdout: {}", e))
    } else {
        fs::write(path, content).map_err(|e| format!("failed to write {}: {}", path.display(), e))
    }
}
