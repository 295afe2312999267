// HTTP handlers for the REST surface

pub mod health;
pub mod teams;
pub mod users;
