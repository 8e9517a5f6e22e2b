mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
};

use crate::io::Format;

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Point and vector geometry tool for the raycasting pipeline.
#[derive(Debug, Parser)]
#[command(name = "raycast", version)]
pub struct RaycastCli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides it.
    pub verbose: u8,

    #[clap(subcommand)]
    pub sub_command: Command,
}
impl RaycastCli {
    /// Log level picked by the verbosity flag.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parser for the subcommands of the raycast binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "transform")]
    /// Apply the affine matrices of a config file to a point file.
    Transform(TransformCli),

    #[command(name = "measure")]
    /// Report the L1, L2 and L-infinity norms of every point in a point file.
    Measure(MeasureCli),

    #[command(name = "example")]
    /// Print an example transform config file.
    Example(ExampleCli),
}

/// Compiled arguments for the transform command. Compiled with clap.
#[derive(Debug, Args)]
pub struct TransformCli {
    /// Path to the transform config file (.json, .yaml/.yml or .toml).
    pub cfg_path: String,
}

/// Compiled arguments for the measure command. Compiled with clap.
#[derive(Debug, Args)]
pub struct MeasureCli {
    /// Path to the point file (.json, .yaml/.yml or .toml).
    pub input_path: String,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the printed report.
    pub format: Format,
}

/// Compiled arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleCli {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the printed config.
    pub format: Format,
}

/// Parse the command line arguments for the raycast binary.
pub fn parse_cli_args() -> RaycastCli {
    RaycastCli::parse()
}

/// Check that the files named on the command line have a supported format.
pub fn check_paths(command: &Command) -> ProcResult<()> {
    let (kind, path) = match command {
        Command::Transform(cli) => ("Config", &cli.cfg_path),
        Command::Measure(cli) => ("Point", &cli.input_path),
        Command::Example(_) => return Ok(()),
    };
    if Format::from_path(path).is_none() {
        err_str(&format!("{} file must be a json, yaml/yml or toml file: {}", kind, path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        RaycastCli::command().debug_assert();
    }

    #[test]
    fn verbosity_levels() {
        let cli = RaycastCli::try_parse_from(["raycast", "-vv", "example"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        let cli = RaycastCli::try_parse_from(["raycast", "example", "--format", "json"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
        match cli.sub_command {
            Command::Example(example) => assert_eq!(example.format, Format::Json),
            other => panic!("Expected example command, got {:?}", other),
        }
    }

    #[test]
    fn path_checks() {
        let cli = RaycastCli::try_parse_from(["raycast", "measure", "points.toml"]).unwrap();
        assert!(check_paths(&cli.sub_command).is_ok());
        let cli = RaycastCli::try_parse_from(["raycast", "transform", "cfg.txt"]).unwrap();
        assert!(check_paths(&cli.sub_command).is_err());
    }
}
