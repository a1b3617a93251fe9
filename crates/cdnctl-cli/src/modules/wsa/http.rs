use cdnctl_core::CDN_API_BASE_URL;
use reqwest::Method;
use serde_json::json;

use crate::modules::system::CommandContext;

pub(crate) const SERVICE_ID_PATH: &str = "/v1.1/service_id";

pub(crate) async fn get_service_id(
    ctx: &CommandContext<'_>,
    domain: &str,
) -> anyhow::Result<Vec<u8>> {
    let domain = domain.trim();
    if domain.is_empty() {
        anyhow::bail!("domain is required");
    }
    let body = json!({ "domain": domain });
    let data = ctx
        .client
        .call(
            Method::POST,
            ctx.base_url_or(CDN_API_BASE_URL),
            SERVICE_ID_PATH,
            Some(&body),
            ctx.profile,
        )
        .await?;
    Ok(data)
}
