pub mod health;
pub mod market;
pub mod news;
