use clap::Parser;
use std::path::PathBuf;

/// formkit - contact form server
#[derive(Parser, Debug, Clone)]
#[command(name = "formkit", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMKIT_CONFIG", default_value = "formkit.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMKIT_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMKIT_PORT")]
    pub port: Option<u16>,

    /// Origin of a separately served UI allowed to post cross-origin (e.g., "http://localhost:8080")
    #[arg(long, env = "FORMKIT_UI_ORIGIN")]
    pub ui_origin: Option<String>,

    /// Maximum number of submissions kept in memory
    #[arg(long, env = "FORMKIT_MAX_SUBMISSIONS")]
    pub max_submissions: Option<usize>,

    /// Serve stored submissions at /admin/submissions
    #[arg(long)]
    pub expose_submissions: bool,
}
