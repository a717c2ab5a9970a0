//! Application shell
//!
//! Owns the employee service and the active view. A route activation builds
//! a fresh view, so form state never survives navigating away.

use std::sync::Arc;

use directory_client::EmployeeService;
use tokio::sync::mpsc;

use crate::navigation::ChannelNavigator;
use crate::routing::Route;
use crate::views::{EmployeeFormController, FormOptions, ListView};

/// View currently on screen
pub enum View {
    Home,
    List(ListView),
    EmployeeForm(EmployeeFormController),
    NotFound(String),
}

pub struct Shell {
    service: Arc<dyn EmployeeService>,
    options: FormOptions,
    navigator: ChannelNavigator,
    requests: mpsc::UnboundedReceiver<Route>,
    route: Route,
    view: View,
}

impl Shell {
    pub fn new(service: Arc<dyn EmployeeService>, options: FormOptions) -> Self {
        let (navigator, requests) = ChannelNavigator::channel();
        Self {
            service,
            options,
            navigator,
            requests,
            route: Route::Home,
            view: View::Home,
        }
    }

    /// Resolve `path` and activate it
    pub async fn navigate(&mut self, path: &str) -> &mut View {
        self.activate(Route::parse(path)).await;
        &mut self.view
    }

    /// Replace the current view with the one behind `route`
    pub async fn activate(&mut self, route: Route) {
        tracing::info!(%route, "Activating route");

        self.view = match &route {
            Route::Home => View::Home,
            Route::List => {
                let mut view = ListView::new(self.service.clone());
                view.activate().await;
                View::List(view)
            }
            Route::Create | Route::Edit { .. } => {
                let mut view = EmployeeFormController::new(
                    self.service.clone(),
                    Arc::new(self.navigator.clone()),
                    &self.options,
                );
                let id = match &route {
                    Route::Edit { id } => Some(id.as_str()),
                    _ => None,
                };
                view.activate(id).await;
                View::EmployeeForm(view)
            }
            Route::NotFound { path } => {
                tracing::warn!(path = %path, "No route matched");
                View::NotFound(path.clone())
            }
        };
        self.route = route;
    }

    /// Activate every navigation request queued by views, in order.
    ///
    /// Returns how many were processed.
    pub async fn process_navigation(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(route) = self.requests.try_recv() {
            self.activate(route).await;
            processed += 1;
        }
        processed
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// The list view, if it is the active one
    pub fn list(&self) -> Option<&ListView> {
        match &self.view {
            View::List(view) => Some(view),
            _ => None,
        }
    }

    /// The employee form, if it is the active one
    pub fn employee_form(&mut self) -> Option<&mut EmployeeFormController> {
        match &mut self.view {
            View::EmployeeForm(view) => Some(view),
            _ => None,
        }
    }
}
