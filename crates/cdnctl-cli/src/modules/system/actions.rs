use reqwest::Method;

use super::http::{normalize_path, parse_body, parse_method, print_response};
use crate::cli_args::RequestArgs;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_request_command(
    args: RequestArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let method: Method = parse_method(&args.method)?;
    let path = normalize_path(&args.path);
    let body = args.data.as_deref().map(parse_body).transpose()?;
    let data = ctx
        .client
        .call(
            method,
            ctx.base_url_or(args.endpoint.base_url()),
            &path,
            body.as_ref(),
            ctx.profile,
        )
        .await?;
    print_response(&data);
    Ok(())
}
