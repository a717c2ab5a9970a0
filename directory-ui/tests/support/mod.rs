// Test doubles shared by the directory-ui integration tests
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use directory_client::{ClientError, ClientResult, EmployeeService};
use directory_ui::{Navigator, Route};
use shared::{ContactPreference, Employee, EmployeeId, Skill};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(EmployeeId),
    Create(Employee),
    Update(Employee),
}

/// In-memory employee collection that records every call
#[derive(Default)]
pub struct FakeEmployeeService {
    employees: Mutex<Vec<Employee>>,
    calls: Mutex<Vec<Call>>,
    failing: AtomicBool,
}

impl FakeEmployeeService {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            ..Self::default()
        }
    }

    /// Make every following call fail with a server error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("service unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeService for FakeEmployeeService {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.record(Call::List)?;
        Ok(self.employees())
    }

    async fn get(&self, id: EmployeeId) -> ClientResult<Employee> {
        self.record(Call::Get(id))?;
        self.employees()
            .into_iter()
            .find(|e| e.id == Some(id))
            .ok_or_else(|| ClientError::NotFound(format!("employee {}", id)))
    }

    async fn create(&self, employee: &Employee) -> ClientResult<Employee> {
        self.record(Call::Create(employee.clone()))?;
        let mut employees = self.employees.lock().unwrap();
        let mut created = employee.clone();
        created.id = Some(employees.iter().filter_map(|e| e.id).max().unwrap_or(0) + 1);
        employees.push(created.clone());
        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> ClientResult<()> {
        self.record(Call::Update(employee.clone()))?;
        let mut employees = self.employees.lock().unwrap();
        match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee.clone();
                Ok(())
            }
            None => Err(ClientError::NotFound("employee".to_string())),
        }
    }
}

/// Navigator that only remembers what it was asked to do
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub fn employee(id: EmployeeId, name: &str, skills: Vec<Skill>) -> Employee {
    Employee {
        id: Some(id),
        full_name: name.to_string(),
        contact_preference: ContactPreference::Email,
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        skills,
    }
}
