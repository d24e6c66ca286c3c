// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers::{parse_counter_pattern, parse_floor};
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::num::NonZeroU64;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "reserve-sizer",
    version = crate::VERSION,
    about = "Recommend type-checker table capacities from counter output",
    long_about = "Reads `name value` counter lines printed by a type checker run and prints \
                  power-of-two --reserve-*-table-capacity flags sized for that codebase.\n\n\
                  Input comes from the given files, from stdin (no files or `-`), or from \
                  the checker itself with --run."
)]
pub struct Args {
    /// Counter output files (`-` for stdin)
    #[arg(value_hint = ValueHint::FilePath, conflicts_with = "run")]
    pub inputs: Vec<PathBuf>,

    /// Run this checker and scan its stdout and stderr
    #[arg(long, value_name = "PROGRAM", value_hint = ValueHint::CommandName, help_heading = "Input")]
    pub run: Option<String>,

    /// Argument passed to --run (repeatable)
    #[arg(
        long = "run-arg",
        value_name = "ARG",
        requires = "run",
        allow_hyphen_values = true,
        help_heading = "Input"
    )]
    pub run_args: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub sizing: SizingArgs,

    #[command(flatten)]
    pub counters: CounterArgs,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Flags, help_heading = "Output")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct SizingArgs {
    /// Minimum class/module table capacity
    #[arg(long, value_parser = parse_floor, help_heading = "Sizing")]
    pub class_floor: Option<NonZeroU64>,

    /// Minimum method table capacity
    #[arg(long, value_parser = parse_floor, help_heading = "Sizing")]
    pub method_floor: Option<NonZeroU64>,
}

/// Counter name patterns: exact name, `re:<regex>`, `prefix:<text>` or `suffix:<text>`.
#[derive(ClapArgs, Debug)]
pub struct CounterArgs {
    /// Counter(s) holding the input file count (replaces the default)
    #[arg(long = "files-counter", value_name = "PATTERN", value_parser = parse_counter_pattern, help_heading = "Counters")]
    pub files: Vec<String>,

    /// Counters summed into the class/module count (replaces the defaults)
    #[arg(long = "class-counter", value_name = "PATTERN", value_parser = parse_counter_pattern, help_heading = "Counters")]
    pub class_modules: Vec<String>,

    /// Counter(s) holding the method count (replaces the default)
    #[arg(long = "method-counter", value_name = "PATTERN", value_parser = parse_counter_pattern, help_heading = "Counters")]
    pub methods: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_hyphen_args() {
        let args = Args::try_parse_from([
            "reserve-sizer",
            "--run",
            "srb",
            "--run-arg",
            "tc",
            "--run-arg",
            "--counters",
        ])
        .unwrap();
        assert_eq!(args.run.as_deref(), Some("srb"));
        assert_eq!(args.run_args, ["tc", "--counters"]);
    }

    #[test]
    fn inputs_conflict_with_run() {
        assert!(Args::try_parse_from(["reserve-sizer", "counters.txt", "--run", "srb"]).is_err());
    }

    #[test]
    fn run_arg_requires_run() {
        assert!(Args::try_parse_from(["reserve-sizer", "--run-arg", "x"]).is_err());
    }

    #[test]
    fn zero_floor_rejected() {
        assert!(Args::try_parse_from(["reserve-sizer", "--class-floor", "0"]).is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["reserve-sizer"]).unwrap();
        assert!(args.inputs.is_empty());
        assert_eq!(args.output.format, OutputFormat::Flags);
        assert!(args.sizing.class_floor.is_none());
        assert!(args.counters.methods.is_empty());
        assert_eq!(args.verbose, 0);
    }
}
