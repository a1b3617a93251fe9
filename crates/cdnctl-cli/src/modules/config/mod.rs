mod actions;
pub(crate) mod args;
pub(crate) mod render;

pub(crate) use actions::handle_config_command;
