//! Employee service
//!
//! [`EmployeeService`] is the boundary between the UI core and the remote
//! `/employees` collection. Callers log failures and never retry.

use async_trait::async_trait;
use shared::{Employee, EmployeeId};

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};

/// Collection path of the employee resource
pub const EMPLOYEES_PATH: &str = "/employees";

/// Operations on the remote employee collection
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// `GET /employees`
    async fn list(&self) -> ClientResult<Vec<Employee>>;

    /// `GET /employees/{id}`; a missing record yields [`ClientError::NotFound`]
    async fn get(&self, id: EmployeeId) -> ClientResult<Employee>;

    /// `POST /employees`; returns the record with its server-assigned id
    async fn create(&self, employee: &Employee) -> ClientResult<Employee>;

    /// `PUT /employees/{id}`
    async fn update(&self, employee: &Employee) -> ClientResult<()>;
}

/// REST implementation of [`EmployeeService`]
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    http: HttpClient,
}

impl EmployeeApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build the HTTP client from `config` and wrap it
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }

    fn item_path(id: EmployeeId) -> String {
        format!("{}/{}", EMPLOYEES_PATH, id)
    }
}

#[async_trait]
impl EmployeeService for EmployeeApi {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.http.get(EMPLOYEES_PATH).await
    }

    async fn get(&self, id: EmployeeId) -> ClientResult<Employee> {
        self.http.get(&Self::item_path(id)).await
    }

    async fn create(&self, employee: &Employee) -> ClientResult<Employee> {
        let created: Employee = self.http.post(EMPLOYEES_PATH, employee).await?;
        tracing::info!(id = ?created.id, "Employee created");
        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> ClientResult<()> {
        let id = employee
            .id
            .ok_or_else(|| ClientError::InvalidRequest("cannot update an employee without id".to_string()))?;
        self.http.put(&Self::item_path(id), employee).await?;
        tracing::info!(id, "Employee updated");
        Ok(())
    }
}
