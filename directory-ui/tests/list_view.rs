// directory-ui/tests/list_view.rs
// List view activation against the in-memory service

mod support;

use std::sync::Arc;

use directory_ui::{ListView, Route};
use support::{Call, FakeEmployeeService, employee};

#[tokio::test]
async fn test_activate_loads_collection() {
    let service = Arc::new(FakeEmployeeService::with_employees(vec![
        employee(1, "Mark", vec![]),
        employee(2, "Mary", vec![]),
    ]));
    let mut view = ListView::new(service.clone());
    assert!(!view.is_loaded());

    view.activate().await;

    assert!(view.is_loaded());
    assert_eq!(view.employees().len(), 2);
    assert_eq!(view.employees()[1].full_name, "Mary");
    assert_eq!(service.calls(), vec![Call::List]);
}

#[tokio::test]
async fn test_failure_keeps_previous_rows() {
    let service = Arc::new(FakeEmployeeService::with_employees(vec![employee(1, "Mark", vec![])]));
    let mut view = ListView::new(service.clone());
    view.activate().await;

    service.set_failing(true);
    view.activate().await;

    assert_eq!(view.employees().len(), 1);
    assert_eq!(service.calls(), vec![Call::List, Call::List]);
}

#[tokio::test]
async fn test_failure_on_first_load_leaves_empty_list() {
    let service = Arc::new(FakeEmployeeService::default());
    service.set_failing(true);
    let mut view = ListView::new(service);

    view.activate().await;

    assert!(!view.is_loaded());
    assert!(view.employees().is_empty());
}

#[tokio::test]
async fn test_edit_route_per_row() {
    let mut unsaved = employee(0, "Draft", vec![]);
    unsaved.id = None;
    let service = Arc::new(FakeEmployeeService::with_employees(vec![employee(7, "Mark", vec![]), unsaved]));
    let mut view = ListView::new(service);
    view.activate().await;

    assert_eq!(view.edit_route(0), Some(Route::Edit { id: "7".to_string() }));
    assert_eq!(view.edit_route(1), None);
    assert_eq!(view.edit_route(5), None);
}
