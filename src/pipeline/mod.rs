/*
 * Responsibility
 * - Authenticated activity dispatch shared by every handler
 *   (claims → authorized request → activity → response envelope)
 * - Nothing here knows about goals, HTTP routing or persistence
 */
pub mod activity;
pub mod claims;
pub mod error;
pub mod request;
pub mod response;
pub mod runner;

pub use activity::Activity;
pub use claims::{Claims, MissingClaim};
pub use error::ActivityError;
pub use request::{AuthenticatedRequest, DecodeError};
pub use response::{ResponseEnvelope, StatusCategory};
pub use runner::ActivityRunner;
