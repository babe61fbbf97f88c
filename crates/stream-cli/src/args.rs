//! Command-line surface for `stream-cli`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stream-cli", version, about = "Livestream read-path operator CLI", long_about = None)]
pub struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Run pending migrations before the command
    #[arg(long, global = true)]
    pub migrate: bool,

    /// Directory holding the schema migrations
    #[arg(long, global = true, default_value = stream_db::MIGRATIONS_DIR)]
    pub migrations_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Statistics for one user's livestreams
    UserStats {
        /// Login name
        username: String,
    },
    /// Statistics for one livestream
    LivestreamStats {
        livestream_id: i64,
    },
    /// Recent livestreams, optionally filtered by tag name
    Livestreams {
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Theme of a streamer
    Theme {
        username: String,
    },
    /// Livestreams owned by a user
    UserLivestreams {
        username: String,
    },
    /// Comments on a livestream, newest first
    Livecomments {
        livestream_id: i64,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Reactions on a livestream, newest first
    Reactions {
        livestream_id: i64,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Reports filed against a livestream's comments
    Reports {
        livestream_id: i64,
    },
    /// The full tag table
    Tags,
    /// Leaderboard of users or livestreams
    Leaderboard {
        #[arg(value_enum)]
        subject: LeaderboardSubject,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderboardSubject {
    Users,
    Livestreams,
}
