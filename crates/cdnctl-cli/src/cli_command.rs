use crate::cli_args::*;
use crate::modules::system::{handle_request_command, CommandContext};
use crate::modules::wsa::handle_wsa;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Wsa(args) => handle_wsa(args, ctx).await?,
        Command::Request(args) => handle_request_command(args, ctx).await?,
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
