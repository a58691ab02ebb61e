pub mod goals;
pub mod health;
