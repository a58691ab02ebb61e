pub mod auth;
pub mod component;

pub use component::ServiceComponent;
