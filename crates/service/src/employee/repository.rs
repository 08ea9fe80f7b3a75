use async_trait::async_trait;

use super::domain::{Employee, EmployeeInput};
use crate::errors::ServiceError;

/// Storage capability behind the employee service.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, ServiceError>;
    /// Insert a new record; the store assigns `id`.
    async fn insert(&self, input: EmployeeInput) -> Result<Employee, ServiceError>;
    /// Overwrite an existing record keyed by `employee.id`.
    async fn save(&self, employee: Employee) -> Result<Employee, ServiceError>;
    async fn delete(&self, employee: &Employee) -> Result<(), ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i64, Employee>,
        last_id: i64,
    }

    /// Ids come from a counter that only moves forward, so deleted ids are
    /// never handed out again.
    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        inner: RwLock<Inner>,
    }

    impl InMemoryEmployeeRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
            let inner = self.inner.read().await;
            Ok(inner.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
            let inner = self.inner.read().await;
            Ok(inner.rows.get(&id).cloned())
        }

        async fn insert(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
            let mut inner = self.inner.write().await;
            inner.last_id += 1;
            let employee = Employee {
                id: inner.last_id,
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
            };
            inner.rows.insert(employee.id, employee.clone());
            Ok(employee)
        }

        async fn save(&self, employee: Employee) -> Result<Employee, ServiceError> {
            let mut inner = self.inner.write().await;
            match inner.rows.get_mut(&employee.id) {
                Some(row) => {
                    *row = employee.clone();
                    Ok(employee)
                }
                None => Err(ServiceError::Db(format!("no row with id {}", employee.id))),
            }
        }

        async fn delete(&self, employee: &Employee) -> Result<(), ServiceError> {
            let mut inner = self.inner.write().await;
            inner.rows.remove(&employee.id);
            Ok(())
        }
    }
}
