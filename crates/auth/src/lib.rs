//! `pressroom-auth` — session boundary for the backoffice API.
//!
//! The lineage subsystem does not make authorization decisions; this crate
//! only defines the claims contract and token verification so the HTTP layer
//! can require a valid session before touching any handler.

pub mod claims;
pub mod principal;
pub mod roles;
pub mod validator;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use principal::PrincipalId;
pub use roles::Role;
pub use validator::{AuthError, Hs256JwtValidator, JwtValidator};
