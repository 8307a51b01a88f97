//! Command-line interface definitions for moveit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;
use moveit_core::{Position, WindowId};

/// Command-line interface for the `moveit` binary.
#[derive(Parser, Debug)]
#[command(
    name = "moveit",
    about = "Place windows and cycle focus by screen position on multi-head X11 desktops",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// Configuration file (RON); defaults to `$XDG_CONFIG_HOME/moveit/config.ron`.
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Move and resize a window to a position on its current monitor.
    Place(PlaceArgs),
    /// Focus the next window at a position on the current monitor.
    Focus(FocusArgs),
    /// List the windows on the current desktop.
    List,
    /// Show monitor geometry with and without panel struts.
    Heads,
}

/// Arguments for the `place` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlaceArgs {
    /// Position token: N S E W NE NW SE SW C BNE BNW BSE BSW (case-insensitive).
    #[arg(value_name = "POSITION")]
    pub position: Position,

    /// Percentage of the monitor width given to the western side.
    #[arg(long, value_name = "PERCENT")]
    pub split: Option<u32>,

    /// Window to place (hex `0x...` or decimal) instead of the focused one.
    #[arg(long, value_name = "ID")]
    pub window: Option<WindowId>,
}

/// Arguments for the `focus` subcommand.
#[derive(Args, Debug, Clone)]
pub struct FocusArgs {
    /// Position token: N S E W NE NW SE SW C O (case-insensitive).
    #[arg(value_name = "POSITION")]
    pub position: Position,

    /// Percentage of the monitor width given to the western side.
    #[arg(long, value_name = "PERCENT")]
    pub split: Option<u32>,

    /// Pixels shaved off each edge of the target region.
    #[arg(long, value_name = "PX")]
    pub margin: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_place_with_overrides() {
        let cli = Cli::try_parse_from([
            "moveit", "place", "ne", "--split", "50", "--window", "0x1a00007",
        ])
        .unwrap();
        let Commands::Place(args) = cli.command else {
            panic!("expected place");
        };
        assert_eq!(args.position, Position::parse("NE"));
        assert_eq!(args.split, Some(50));
        assert_eq!(args.window, Some(WindowId::new(0x1a0_0007)));
    }

    #[test]
    fn parses_focus_and_global_flags() {
        let cli = Cli::try_parse_from([
            "moveit", "focus", "O", "--margin", "10", "--debug", "--config", "/tmp/m.ron",
        ])
        .unwrap();
        assert!(cli.log.debug);
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/m.ron")));
        let Commands::Focus(args) = cli.command else {
            panic!("expected focus");
        };
        assert_eq!(args.position, Position::OtherHead);
        assert_eq!(args.margin, Some(10));
        assert_eq!(args.split, None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Cli::try_parse_from(["moveit"]).is_err());
        assert!(Cli::try_parse_from(["moveit", "place"]).is_err());
        assert!(Cli::try_parse_from(["moveit", "place", "W", "--window", "0xzz"]).is_err());
        assert!(Cli::try_parse_from(["moveit", "focus", "W", "--split", "-1"]).is_err());
    }

    #[test]
    fn list_and_heads_take_no_arguments() {
        assert!(matches!(
            Cli::try_parse_from(["moveit", "list"]).unwrap().command,
            Commands::List
        ));
        assert!(matches!(
            Cli::try_parse_from(["moveit", "heads"]).unwrap().command,
            Commands::Heads
        ));
    }
}
