use clap::{Args, Subcommand};

#[derive(Args)]
pub struct WsaArgs {
    #[command(subcommand)]
    pub command: WsaCommand,
}

#[derive(Subcommand)]
pub enum WsaCommand {
    #[command(about = "Get Web Acceleration Services for a domain")]
    Get(WsaGetArgs),
}

#[derive(Args)]
pub struct WsaGetArgs {
    #[arg(help = "Domain name, e.g. example.com")]
    pub domain: String,
}
