//! Service layer providing the employee operations on top of models.
//! - Storage is reached only through the `EmployeeRepository` trait.
//! - `NotFound` is the single business error surfaced to callers.

pub mod errors;
pub mod employee;
#[cfg(test)]
pub mod test_support;

pub use employee::{EmployeeRepository, EmployeeService};
