use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Employee, EmployeeInput};
use super::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// Employee operations independent of the web framework. Every call is a
/// single attempt against the repository; nothing is cached between calls.
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All employees in storage order.
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Employee, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::employee_not_found(id))
    }

    /// Persist a new employee; the store assigns the id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::employee::{EmployeeInput, EmployeeService, repository::memory::InMemoryEmployeeRepository};
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
    /// let created = tokio_test::block_on(svc.create(EmployeeInput::new("Ana", "Lee", "ana@x.com"))).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.email, "ana@x.com");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "employee_created");
        Ok(created)
    }

    /// Overwrite the non-empty fields of `input` onto the stored record.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let mut employee = self.get(id).await?;
        input.apply_to(&mut employee);
        let saved = self.repo.save(employee).await?;
        info!(id = saved.id, "employee_updated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let employee = self.get(id).await?;
        self.repo.delete(&employee).await?;
        info!(id, "employee_deleted");
        Ok(())
    }
}
