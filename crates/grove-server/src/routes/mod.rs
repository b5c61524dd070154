pub mod health;
pub mod motivation;
