pub mod goals;
