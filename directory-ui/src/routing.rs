//! Route table
//!
//! | Path         | Route              |
//! |--------------|--------------------|
//! | `/`, `/home` | [`Route::Home`]    |
//! | `/list`      | [`Route::List`]    |
//! | `/create`    | [`Route::Create`]  |
//! | `/edit/:id`  | [`Route::Edit`]    |
//! | anything else| [`Route::NotFound`]|
//!
//! The `:id` segment is kept raw. Whether it is numeric is decided by the
//! form view, which falls back to create mode when it is not.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteName {
    Home,
    List,
    Create,
    Edit,
}

/// Declarative path table, matched in order
const ROUTE_TABLE: &[(&str, RouteName)] = &[
    ("", RouteName::Home),
    ("home", RouteName::Home),
    ("list", RouteName::List),
    ("create", RouteName::Create),
    ("edit/:id", RouteName::Edit),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    Create,
    Edit { id: String },
    NotFound { path: String },
}

impl Route {
    /// Resolve a browser path. Query strings, fragments and surrounding
    /// slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        for (pattern, name) in ROUTE_TABLE {
            if let Some(params) = match_pattern(pattern, &segments) {
                return match name {
                    RouteName::Home => Self::Home,
                    RouteName::List => Self::List,
                    RouteName::Create => Self::Create,
                    RouteName::Edit => Self::Edit {
                        id: params.into_iter().next().unwrap_or_default().to_string(),
                    },
                };
            }
        }

        Self::NotFound {
            path: path.to_string(),
        }
    }

    /// Edit route for a persisted employee
    pub fn edit(id: impl fmt::Display) -> Self {
        Self::Edit { id: id.to_string() }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/home".to_string(),
            Self::List => "/list".to_string(),
            Self::Create => "/create".to_string(),
            Self::Edit { id } => format!("/edit/{}", id),
            Self::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Match `segments` against a pattern such as `edit/:id`, returning the
/// captured `:param` segments in order.
fn match_pattern<'a>(pattern: &str, segments: &[&'a str]) -> Option<Vec<&'a str>> {
    let parts: Vec<&str> = if pattern.is_empty() {
        Vec::new()
    } else {
        pattern.split('/').collect()
    };
    if parts.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (part, segment) in parts.iter().zip(segments) {
        if part.starts_with(':') {
            params.push(*segment);
        } else if part != segment {
            return None;
        }
    }
    Some(params)
}
