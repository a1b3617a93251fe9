use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Add a new profile; missing values are prompted for")]
    Add(AddProfileArgs),
    #[command(about = "Remove a profile")]
    Remove(RemoveProfileArgs),
    #[command(about = "Show one profile or all profiles")]
    Show(ShowProfileArgs),
    #[command(about = "Set the default profile")]
    Use(UseProfileArgs),
}

#[derive(Args)]
pub struct AddProfileArgs {
    #[arg(long, help = "Profile name")]
    pub name: Option<String>,
    #[arg(long, help = "Access key")]
    pub access_key: Option<String>,
    #[arg(long, env = "CDNCTL_ACCESS_KEY_SECRET", hide_env_values = true)]
    pub access_key_secret: Option<String>,
    #[arg(long = "default", help = "Make this the default profile")]
    pub make_default: bool,
}

#[derive(Args)]
pub struct RemoveProfileArgs {
    #[arg(help = "Profile name")]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct ShowProfileArgs {
    #[arg(help = "Profile name; all profiles when omitted")]
    pub name: Option<String>,
    #[arg(long, help = "Print access key secrets in clear text")]
    pub show_secrets: bool,
}

#[derive(Args)]
pub struct UseProfileArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}
