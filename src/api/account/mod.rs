pub mod client;
pub mod types;

pub use self::client::AccountApi;
pub use self::types::{KeyAndPassword, ManagedUser};
