mod actions;
pub(crate) mod args;
pub(crate) mod http;

pub(crate) use actions::handle_wsa;
