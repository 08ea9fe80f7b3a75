use std::sync::Arc;

use service::{EmployeeRepository, EmployeeService};

pub type SharedEmployeeService = Arc<EmployeeService<dyn EmployeeRepository>>;

/// Per-process handler state. The repository carries the only shared
/// resource (the storage handle).
#[derive(Clone)]
pub struct AppState {
    pub employees: SharedEmployeeService,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(repo)) }
    }
}
