//! Staff directory UI core
//!
//! Views, routing and the reactive employee form, driven by an explicitly
//! passed [`EmployeeService`](directory_client::EmployeeService).
//!
//! ```ignore
//! let config = AppConfig::load()?;
//! logger::init_logger(&config)?;
//!
//! let service = Arc::new(EmployeeApi::from_config(&config.client_config())?);
//! let mut shell = Shell::new(service, config.form_options());
//! shell.navigate("/list").await;
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod navigation;
pub mod routing;
pub mod shell;
pub mod views;

pub use config::AppConfig;
pub use error::{ConfigError, FormError, FormResult};
pub use navigation::{ChannelNavigator, Navigator};
pub use routing::Route;
pub use shell::{Shell, View};
pub use views::{EmployeeFormController, FormMode, FormOptions, ListView};
