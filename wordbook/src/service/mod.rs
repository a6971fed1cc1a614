pub mod health;
pub mod word;
