pub(crate) mod config;
pub(crate) mod system;
pub(crate) mod wsa;
