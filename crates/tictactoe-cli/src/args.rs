use clap::{Args, Parser, Subcommand};

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Play Tic Tac Toe against a remote game service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Game service base URL")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file instead of stderr")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayerArgs {
    #[arg(long, help = "Name of the X player")]
    pub player_x: Option<String>,

    #[arg(long, help = "Name of the O player")]
    pub player_o: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive board (default)")]
    Play {
        #[command(flatten)]
        players: PlayerArgs,

        #[arg(long, help = "Attach to an existing game instead of starting one")]
        game: Option<String>,
    },

    #[command(about = "Start a new game and print it")]
    Start {
        #[command(flatten)]
        players: PlayerArgs,
    },

    #[command(about = "Fetch and print a game")]
    Show { game_id: String },

    #[command(about = "Place the next player's mark")]
    Move {
        game_id: String,
        #[arg(help = "Row, 0 to 2")]
        row: usize,
        #[arg(help = "Column, 0 to 2")]
        col: usize,
    },

    #[command(about = "Print every change to a game until it ends")]
    Watch { game_id: String },

    #[command(about = "Inspect or edit the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Print the config file path")]
    Path,

    #[command(about = "Save the game service base URL")]
    SetUrl { url: String },
}
