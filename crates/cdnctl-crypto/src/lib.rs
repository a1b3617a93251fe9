#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod credentials;
pub mod sources;
pub mod signer;

pub use crate::credentials::*;
pub use crate::signer::*;
pub use crate::sources::*;
