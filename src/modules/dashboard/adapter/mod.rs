pub mod query_postgres;
pub mod routes;
