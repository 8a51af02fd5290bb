use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use todoapp::config::BackendKind;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.4.2"
/// Format for dev builds: "v0.4.2\ndev: abc1234 2026-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    bin_name = "todo",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Start a server with `todo serve`, then manage the list from another terminal."
)]
#[command(about = "A small todo list served over HTTP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to todo.toml in the OS config directory)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Server to talk to (defaults to the configured bind address and port)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// List all todos, newest first
    #[command(alias = "ls")]
    List {
        /// Print the raw JSON array
        #[arg(long)]
        json: bool,
    },

    /// Add a todo
    Add {
        /// Title words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Create it already completed
        #[arg(long)]
        done: bool,

        /// Owner id (the server defaults to 1)
        #[arg(long, value_name = "N")]
        user_id: Option<i64>,
    },

    /// Show one todo
    #[command(alias = "view")]
    Show {
        id: String,
    },

    /// Mark a todo completed
    Done {
        id: String,
    },

    /// Mark a todo not completed
    Undone {
        id: String,
    },

    /// Change a todo's title or owner
    Edit {
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New owner id
        #[arg(long, value_name = "N")]
        user_id: Option<i64>,
    },

    /// Delete a todo
    #[command(alias = "delete")]
    Rm {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Storage backend
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// JSON file for the file backend
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Key-value file for the local backend
    #[arg(long, value_name = "PATH")]
    pub storage_file: Option<PathBuf>,

    /// Seed an empty local slot from this URL on first read
    #[arg(long, value_name = "URL")]
    pub seed_url: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    File,
    Local,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::File => BackendKind::File,
            BackendArg::Local => BackendKind::Local,
        }
    }
}
