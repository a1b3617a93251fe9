mod actions;
pub(crate) mod args;
pub(crate) mod http;
pub(crate) mod types;

pub(crate) use actions::handle_request_command;
pub(crate) use types::CommandContext;
