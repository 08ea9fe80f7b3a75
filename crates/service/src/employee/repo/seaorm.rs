use sea_orm::DatabaseConnection;

use crate::employee::domain::{Employee, EmployeeInput};
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository. Holds a clone of the pool handle owned by the
/// caller.
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(models::employee::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
        Ok(models::employee::find(&self.db, id).await?)
    }

    async fn insert(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let created = models::employee::create(&self.db, &input.first_name, &input.last_name, &input.email).await?;
        Ok(created)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, ServiceError> {
        Ok(models::employee::overwrite(&self.db, employee).await?)
    }

    async fn delete(&self, employee: &Employee) -> Result<(), ServiceError> {
        models::employee::delete(&self.db, employee.id).await?;
        Ok(())
    }
}
