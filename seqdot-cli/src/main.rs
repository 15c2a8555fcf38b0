use clap::Parser;
use seqdot_core::io::SequenceReader;
use seqdot_core::report::{build_report, to_json};
use seqdot_core::{DotplotPipeline, FilterSource, PlotParams, Region};
use seqdot_render::{save, ColorMode, RenderConfig, Renderer};
use std::path::PathBuf;

mod config;
mod error;

use config::Config;
use error::{print_error_and_exit, CliError, CliResult};

#[derive(Parser, Debug)]
#[command(name = "seqdot")]
#[command(about = "seqdot - Dot plots of two sequences with diagonal run detection")]
#[command(version)]
struct Cli {
    /// First sequence (x axis), or its file with --fasta
    seq1: String,

    /// Second sequence (y axis), or its file with --fasta
    seq2: String,

    /// Output image file (PNG, or SVG by extension)
    output: PathBuf,

    /// Minimum diagonal run length; 1 or less plots every match
    #[arg(short = 'n', long = "min-length")]
    min_length: Option<usize>,

    /// Image width in pixels
    #[arg(short = 'w', long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Primary filter weights along the first sequence
    #[arg(short = 'x', long = "x-weights", value_name = "FILE", requires = "y_weights")]
    x_weights: Option<PathBuf>,

    /// Primary filter weights along the second sequence
    #[arg(short = 'y', long = "y-weights", value_name = "FILE", requires = "x_weights")]
    y_weights: Option<PathBuf>,

    /// Secondary filter weights along the first sequence
    #[arg(short = 'p', long = "p-weights", value_name = "FILE", requires = "q_weights")]
    p_weights: Option<PathBuf>,

    /// Secondary filter weights along the second sequence
    #[arg(short = 'q', long = "q-weights", value_name = "FILE", requires = "p_weights")]
    q_weights: Option<PathBuf>,

    /// Read sequences from FASTA/FASTQ or plain text files
    #[arg(long)]
    fasta: bool,

    /// Highlight a band, e.g. "x:100:50" or "y:0:20:#ff0000" (repeatable)
    #[arg(long = "region", value_name = "AXIS:START:LEN[:#RRGGBB]")]
    regions: Vec<String>,

    /// Configuration file (defaults to ./seqdot.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dump the final grid to stderr
    #[arg(long)]
    print_grid: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(err) = cmd_plot(cli) {
        print_error_and_exit(&err);
    }
}

fn filter_pair(x: Option<PathBuf>, y: Option<PathBuf>) -> Option<FilterSource> {
    x.zip(y).map(|(x, y)| FilterSource::files(x, y))
}

fn read_sequence(arg: &str, from_file: bool) -> CliResult<Vec<u8>> {
    if from_file {
        log::info!("Reading sequence from {}", arg);
        Ok(SequenceReader::read_file(arg)?)
    } else {
        Ok(arg.as_bytes().to_vec())
    }
}

fn cmd_plot(cli: Cli) -> CliResult<()> {
    let config = Config::load(cli.config.as_deref())?;

    let region_color = config.region_color()?;
    let regions = cli
        .regions
        .iter()
        .map(|spec| Region::parse_with_color(spec, region_color))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::usage(format!("--region: {e}")))?;

    let seq1 = read_sequence(&cli.seq1, cli.fasta)?;
    let seq2 = read_sequence(&cli.seq2, cli.fasta)?;

    let params = PlotParams {
        min_run_length: cli.min_length.unwrap_or(config.plot.min_length),
        primary: filter_pair(cli.x_weights, cli.y_weights),
        secondary: filter_pair(cli.p_weights, cli.q_weights),
    };
    let out = DotplotPipeline::new(params).run(&seq1, &seq2)?;

    if cli.print_grid {
        eprint!("{}", out.grid);
    }

    let renderer = Renderer::new(RenderConfig {
        width: cli.width.unwrap_or(config.plot.width),
        height: cli.height.unwrap_or(config.plot.height),
        background: config.background()?,
        match_color: config.match_color()?,
        regions,
    });
    let chooser = config.color_chooser()?;
    let mode = if out.weighted {
        ColorMode::Continuous(&chooser)
    } else {
        ColorMode::Binary
    };
    save(&renderer, &out.grid, mode, &cli.output)?;

    let report = build_report(&out.runs, &seq1);
    log::debug!("Reporting {} runs", report.len());
    println!("{}", to_json(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "seqdot", "ACTG", "ACTG", "out.png", "-n", "2", "-w", "10", "-H", "20", "--region", "x:0:2",
            "--region", "y:1:1:#ff0000",
        ])
        .unwrap();
        assert_eq!(cli.min_length, Some(2));
        assert_eq!(cli.width, Some(10));
        assert_eq!(cli.height, Some(20));
        assert_eq!(cli.regions.len(), 2);
        assert!(!cli.fasta);
    }

    #[test]
    fn test_every_flag_has_help() {
        let command = Cli::command();
        for arg in command.get_arguments() {
            assert!(arg.get_help().is_some(), "no help for {}", arg.get_id());
        }
    }

    #[test]
    fn test_weight_files_come_in_pairs() {
        let err = Cli::try_parse_from(["seqdot", "A", "A", "o.png", "-x", "w.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
