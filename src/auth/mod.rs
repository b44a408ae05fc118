pub mod jwt;
pub mod password;
pub mod roles;

pub use jwt::{Claims, JwtError, TokenIssuer};
pub use password::{hash_password, verify_password};
pub use roles::Role;
