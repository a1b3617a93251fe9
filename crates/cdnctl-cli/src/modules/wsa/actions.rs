use super::http::get_service_id;
use crate::cli_args::*;
use crate::modules::system::http::print_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_wsa(args: WsaArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        WsaCommand::Get(args) => {
            let data = get_service_id(ctx, &args.domain).await?;
            print_response(&data);
        }
    }
    Ok(())
}
