//! Service layer: the employee persistence pipeline.
//! - Validates request bodies through `models::employee::validate`.
//! - Runs one parameterized statement per operation on the pooled connection.
//! - Reports outcomes as `ServiceError` for the HTTP layer to map.

pub mod errors;
pub mod employee_store;
#[cfg(test)]
pub mod test_support;

pub use employee_store::EmployeeStore;
pub use errors::ServiceError;
