pub mod motivation;
