mod cmd;
mod logging;
mod prompt;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use pelipost_core::config::loader::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pelipost", version, about = "Manage Pelican blog posts from the terminal")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Print the status of a post (draft when unset)
    Status(PostArgs),

    /// Flip a post between draft and published
    Toggle(PostArgs),

    /// Set metadata fields on a post
    Set(SetArgs),

    /// Show the parsed metadata of a post
    Show(ShowArgs),

    /// List posts under the content directory
    List(ListArgs),

    /// List available post templates
    Templates,

    /// Create a new post from a template
    New(NewArgs),

    /// Print the commit message for publishing a post
    CommitMsg(PostArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    /// Path to the post file
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Path to the post file
    pub file: PathBuf,

    /// Field assignment, e.g. --field title="New title" or --field tags=a,b
    #[arg(long = "field", short = 'f', value_name = "KEY=VALUE", required = true)]
    pub fields: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Path to the post file
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list posts with this status
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet (paths only)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template name (see `pelipost templates`)
    #[arg(long, short = 't')]
    pub template: Option<String>,

    /// Post title
    #[arg(long)]
    pub title: Option<String>,

    /// Post slug (derived from the title when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Never prompt; fail when a value is missing
    #[arg(long)]
    pub batch: bool,
}

fn main() {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref());
    match &loaded {
        Ok(cfg) => logging::init(&cfg.logging),
        Err(_) => logging::init(&Default::default()),
    }

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), loaded),
        Commands::Status(args) => cmd::status::run_status(&args.file),
        Commands::Toggle(args) => cmd::status::run_toggle(&args.file),
        Commands::Set(args) => cmd::set::run(args),
        Commands::Show(args) => cmd::show::run(args),
        Commands::List(args) => cmd::list::run(cmd::require_config(loaded), args),
        Commands::Templates => cmd::templates::run(loaded.ok()),
        Commands::New(args) => cmd::new::run(cmd::require_config(loaded), args),
        Commands::CommitMsg(args) => cmd::commit_msg::run(loaded.ok(), &args.file),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "pelipost", &mut std::io::stdout());
        }
    }

    logging::shutdown();
}
