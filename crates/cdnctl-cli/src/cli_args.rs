use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::config::args::*;
pub use crate::modules::system::args::*;
pub use crate::modules::wsa::args::*;

#[derive(Parser)]
#[command(name = "cdnctl")]
#[command(about = "CDN management API client")]
pub struct Cli {
    #[arg(long, env = "CDNCTL_CONFIG", help = "Profile file (default ~/.config/cdnctl/config.yaml)")]
    pub config: Option<String>,
    #[arg(long, env = "CDNCTL_PROFILE", help = "Profile used to sign API calls")]
    pub profile: Option<String>,
    #[arg(long, env = "CDNCTL_BASE_URL", help = "Override the API base URL")]
    pub base_url: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Manage credential profiles")]
    Config(ConfigArgs),
    #[command(about = "Manage Web Acceleration Services")]
    Wsa(WsaArgs),
    #[command(about = "Send a signed request to any API path")]
    Request(RequestArgs),
}
