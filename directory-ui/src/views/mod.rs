//! Views behind the route table

pub mod employee_form;
pub mod list;

pub use employee_form::{EmployeeFormController, FormMode, FormOptions};
pub use list::ListView;
