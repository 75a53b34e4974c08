//! User accounts: wallets, trip history, and the registry.

mod error;
mod registry;
mod user;

pub use error::AccountError;
pub use registry::UserRegistry;
pub use user::User;
