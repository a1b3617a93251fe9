use cdnctl_core::ApiClient;

pub struct CommandContext<'a> {
    pub client: &'a ApiClient,
    /// `--base-url` override; commands fall back to their own endpoint.
    pub base_url: Option<&'a str>,
    /// Empty means the default profile.
    pub profile: &'a str,
}

impl CommandContext<'_> {
    pub fn base_url_or<'b>(&'b self, fallback: &'b str) -> &'b str {
        self.base_url.unwrap_or(fallback)
    }
}
