pub mod application;
pub mod routes;
