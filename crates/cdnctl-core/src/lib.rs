#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod constants;
pub mod error;
pub mod profiles;
pub mod store;

pub use crate::client::*;
pub use crate::constants::*;
pub use crate::error::*;
pub use crate::profiles::*;
pub use crate::store::*;
