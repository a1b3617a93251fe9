use clap::{Args, ValueEnum};
use cdnctl_core::{BASE_API_BASE_URL, CDN_API_BASE_URL};

#[derive(Args)]
pub struct RequestArgs {
    #[arg(help = "HTTP method, e.g. GET or POST")]
    pub method: String,
    #[arg(help = "API path, e.g. /v1.1/service_id")]
    pub path: String,
    #[arg(long, help = "JSON request body")]
    pub data: Option<String>,
    #[arg(long, value_enum, default_value_t = Endpoint::Cdn)]
    pub endpoint: Endpoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Endpoint {
    Cdn,
    Base,
}

impl Endpoint {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Cdn => CDN_API_BASE_URL,
            Self::Base => BASE_API_BASE_URL,
        }
    }
}
