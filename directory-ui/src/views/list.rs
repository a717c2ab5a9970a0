//! Employee list view

use std::sync::Arc;

use directory_client::EmployeeService;
use shared::Employee;

use crate::routing::Route;

/// Displays the employee collection
pub struct ListView {
    service: Arc<dyn EmployeeService>,
    employees: Vec<Employee>,
    loaded: bool,
}

impl ListView {
    pub fn new(service: Arc<dyn EmployeeService>) -> Self {
        Self {
            service,
            employees: Vec::new(),
            loaded: false,
        }
    }

    /// Fetch the collection. On failure the previous rows stay on screen.
    pub async fn activate(&mut self) {
        match self.service.list().await {
            Ok(employees) => {
                tracing::info!(count = employees.len(), "Employees loaded");
                self.employees = employees;
                self.loaded = true;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load employees");
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Whether at least one fetch has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Edit link for the row at `index`, if it is persisted
    pub fn edit_route(&self, index: usize) -> Option<Route> {
        self.employees.get(index)?.id.map(Route::edit)
    }
}
