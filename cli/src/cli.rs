use std::path::PathBuf;

use clap::{Parser, Subcommand};

use castlink_core::compression::CompressionCodec;
use castlink_core::pipeline::ApiConfig;

#[derive(Parser)]
#[command(name = "castlink")]
#[command(version, about = "Share terminal recordings as self-contained links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Compression codec for new links (auto, xz, zstd, deflate)
    #[arg(long, global = true, env = "CASTLINK_CODEC")]
    pub codec: Option<CompressionCodec>,

    /// Compression level (defaults to the codec maximum)
    #[arg(long, global = true, env = "CASTLINK_LEVEL", allow_negative_numbers = true)]
    pub level: Option<i32>,

    /// Page the share link points at
    #[arg(long, global = true, env = "CASTLINK_BASE_URL")]
    pub base_url: Option<String>,

    /// Query parameter carrying the token
    #[arg(long, global = true, env = "CASTLINK_PARAM")]
    pub param: Option<String>,

    /// Log filter, e.g. `debug` or `castlink_core=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Turn a recording into a share link
    Share {
        /// Recording file (reads stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Print only the token instead of the full URL
        #[arg(long)]
        token_only: bool,

        /// Print telemetry as JSON on stderr
        #[arg(long)]
        stats_json: bool,

        /// Skip the first-line JSON header check
        #[arg(long)]
        no_validate: bool,
    },

    /// Recover a recording from a share link or bare token
    Play {
        /// Share URL or token
        link: String,

        /// Write the recording here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.codec, self.level, self.base_url.clone(), self.param.clone())
    }
}
