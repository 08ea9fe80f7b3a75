use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn employee_not_found(id: i64) -> Self {
        Self::NotFound(format!("Employee not found for this id :: {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;

    #[test]
    fn employee_not_found_names_the_id() {
        assert_eq!(ServiceError::employee_not_found(1).to_string(), "Employee not found for this id :: 1");
    }
}
