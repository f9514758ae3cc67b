pub mod bulk;
pub mod check;
pub mod health;
