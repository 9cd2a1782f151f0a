use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "charmil",
    version,
    about = "Bootstrap a new CLI project from the charmil starter",
    long_about = None
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Configuration file path
    #[clap(long, default_value = ".config/charmil.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,

    /// Don't check GitHub for a newer charmil release
    #[clap(
        long,
        env = "CHARMIL_NO_UPDATE_CHECK",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        global = true
    )]
    pub no_update_check: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Clone the starter into the current directory and fill in its names
    Init(InitArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// GitHub organization or username (prompted for when omitted)
    #[clap(long)]
    pub owner: Option<String>,

    /// GitHub repository name (prompted for when omitted)
    #[clap(long)]
    pub repo: Option<String>,

    /// Name of the new CLI (prompted for when omitted)
    #[clap(long)]
    pub cli_name: Option<String>,

    /// Template repository to clone instead of the charmil starter
    #[clap(long, value_name = "URL")]
    pub template: Option<String>,

    /// Branch of the template repository to check out
    #[clap(long)]
    pub branch: Option<String>,
}
