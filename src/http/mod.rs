pub mod errors;
pub mod health;
pub mod routes;
pub mod turns;
