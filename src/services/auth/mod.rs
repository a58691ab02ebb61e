pub mod factory;
pub mod verifier;

pub use factory::build_claims_verifier;
pub use verifier::{ClaimsVerifier, VerifyError};
