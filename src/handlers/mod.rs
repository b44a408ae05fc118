// handlers/mod.rs - Handler tiers
//
// Public (no token) and protected (bearer token, optional role). Access is
// enforced by the route guard in middleware::auth, not by the handlers.
pub mod protected;
pub mod public;
