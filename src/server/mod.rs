pub mod app;
pub mod error;
pub mod routes;
pub mod serializers;

#[cfg(test)]
pub mod testing;
