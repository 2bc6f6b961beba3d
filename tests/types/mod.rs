pub mod combine;
pub mod maybe;
