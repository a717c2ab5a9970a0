// directory-ui/tests/shell.rs
// Route activation and navigation round trips through the shell

mod support;

use std::sync::Arc;

use directory_ui::views::employee_form::FULL_NAME;
use directory_ui::{FormMode, FormOptions, Route, Shell, View};
use shared::Skill;
use support::{Call, FakeEmployeeService, employee};

fn shell(service: &Arc<FakeEmployeeService>) -> Shell {
    Shell::new(service.clone(), FormOptions::default())
}

#[tokio::test]
async fn test_list_route_fetches_employees() {
    let service = Arc::new(FakeEmployeeService::with_employees(vec![employee(1, "Mark", vec![])]));
    let mut shell = shell(&service);

    let view = shell.navigate("/list").await;

    assert!(matches!(view, View::List(list) if list.employees().len() == 1));
    assert_eq!(shell.route(), &Route::List);
}

#[tokio::test]
async fn test_create_and_malformed_edit_use_create_mode() {
    let service = Arc::new(FakeEmployeeService::default());
    let mut shell = shell(&service);

    shell.navigate("/create").await;
    assert_eq!(shell.employee_form().map(|f| f.mode()), Some(FormMode::Create));

    shell.navigate("/edit/abc").await;
    assert_eq!(shell.employee_form().map(|f| f.mode()), Some(FormMode::Create));
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let service = Arc::new(FakeEmployeeService::default());
    let mut shell = shell(&service);

    shell.navigate("/settings").await;

    assert!(matches!(shell.view(), View::NotFound(path) if path == "/settings"));
    assert!(shell.list().is_none());
}

#[tokio::test]
async fn test_edit_submit_returns_to_list() {
    let service = Arc::new(FakeEmployeeService::with_employees(vec![employee(
        1,
        "Mark",
        vec![Skill::new("C#", 5, "advanced")],
    )]));
    let mut shell = shell(&service);

    shell.navigate("/edit/1").await;
    let form = shell.employee_form().unwrap();
    assert_eq!(form.mode(), FormMode::Edit(1));
    form.set_value(FULL_NAME, "Mark Hastings").unwrap();
    form.submit().await.unwrap();

    assert_eq!(shell.process_navigation().await, 1);
    assert_eq!(shell.route(), &Route::List);
    assert_eq!(shell.list().unwrap().employees()[0].full_name, "Mark Hastings");
    assert!(matches!(service.calls().as_slice(), [Call::Get(1), Call::Update(_), Call::List]));
}

#[tokio::test]
async fn test_no_pending_navigation() {
    let service = Arc::new(FakeEmployeeService::default());
    let mut shell = shell(&service);

    assert_eq!(shell.process_navigation().await, 0);
    assert_eq!(shell.route(), &Route::Home);
    assert!(matches!(shell.view(), View::Home));
}
