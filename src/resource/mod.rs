pub mod user;
pub mod validate;
