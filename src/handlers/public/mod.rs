// handlers/public/mod.rs - Endpoints reachable without a token
pub mod health;
pub mod login;

pub use health::{health, info};
pub use login::login;
