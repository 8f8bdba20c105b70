//! Front controller route table.
//!
//! GET paths are read as `/{controller}/{action}` and looked up in a table of
//! controller -> action -> [`Action`] rules. A missing controller segment
//! means [`DEFAULT_CONTROLLER`], a missing action segment means
//! [`DEFAULT_ACTION`].

use std::collections::HashMap;

use crate::error::AppError;

pub const DEFAULT_CONTROLLER: &str = "Application";
pub const DEFAULT_ACTION: &str = "index";

/// Something the front controller can serve for a GET request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render the contact form page.
    Index,
    /// Plain-text robots exclusion file.
    Robots,
    /// Render the debug page.
    Debug,
}

/// A `(controller, action)` pair extracted from a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route<'a> {
    pub controller: &'a str,
    pub action: &'a str,
}

impl<'a> Route<'a> {
    /// Split a request path into controller and action segments.
    ///
    /// Empty segments are skipped, so `/debug/` and `//debug` both name the
    /// `debug` controller. Segments past the second are ignored.
    pub fn from_path(path: &'a str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let controller = segments.next().unwrap_or(DEFAULT_CONTROLLER);
        let action = segments.next().unwrap_or(DEFAULT_ACTION);
        Self { controller, action }
    }
}

/// Controller -> action -> [`Action`] lookup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: HashMap<&'static str, HashMap<&'static str, Action>>,
}

impl RouteTable {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register an action under `controller/action`, replacing any previous
    /// rule for the same pair.
    pub fn with_rule(
        mut self,
        controller: &'static str,
        action: &'static str,
        target: Action,
    ) -> Self {
        self.rules.entry(controller).or_default().insert(action, target);
        self
    }

    /// Look up the action for a route.
    ///
    /// Unknown controllers and unknown actions are reported separately so the
    /// client can tell them apart.
    pub fn resolve(&self, route: &Route<'_>) -> Result<Action, AppError> {
        let actions = self
            .rules
            .get(route.controller)
            .ok_or_else(|| AppError::ControllerNotFound(route.controller.to_string()))?;

        actions
            .get(route.action)
            .copied()
            .ok_or_else(|| AppError::ActionNotFound {
                controller: route.controller.to_string(),
                action: route.action.to_string(),
            })
    }
}

impl Default for RouteTable {
    /// The site's standard rules: the form page, robots.txt and the debug page.
    fn default() -> Self {
        Self::empty()
            .with_rule(DEFAULT_CONTROLLER, DEFAULT_ACTION, Action::Index)
            .with_rule("robots.txt", DEFAULT_ACTION, Action::Robots)
            .with_rule("debug", DEFAULT_ACTION, Action::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn resolve(path: &str) -> Result<Action, AppError> {
        RouteTable::default().resolve(&Route::from_path(path))
    }

    #[test]
    fn root_defaults_to_application_index() {
        assert_eq!(
            Route::from_path("/"),
            Route {
                controller: "Application",
                action: "index"
            }
        );
        assert_matches!(resolve("/"), Ok(Action::Index));
    }

    #[test]
    fn explicit_controller_and_action() {
        assert_matches!(resolve("/Application/index"), Ok(Action::Index));
        assert_matches!(resolve("/debug/index"), Ok(Action::Debug));
    }

    #[test]
    fn robots_resolves_with_default_action() {
        assert_matches!(resolve("/robots.txt"), Ok(Action::Robots));
    }

    #[test]
    fn trailing_and_repeated_slashes_are_ignored() {
        assert_matches!(resolve("/debug/"), Ok(Action::Debug));
        assert_matches!(resolve("//debug"), Ok(Action::Debug));
    }

    #[test]
    fn unknown_controller() {
        assert_matches!(resolve("/admin"), Err(AppError::ControllerNotFound(c)) if c == "admin");
    }

    #[test]
    fn unknown_action() {
        assert_matches!(
            resolve("/debug/verbose"),
            Err(AppError::ActionNotFound { controller, action })
                if controller == "debug" && action == "verbose"
        );
    }

    #[test]
    fn controller_names_are_case_sensitive() {
        assert_matches!(resolve("/application"), Err(AppError::ControllerNotFound(_)));
    }

    #[test]
    fn later_rule_replaces_earlier() {
        let table = RouteTable::empty()
            .with_rule("x", "index", Action::Index)
            .with_rule("x", "index", Action::Debug);
        assert_matches!(table.resolve(&Route::from_path("/x")), Ok(Action::Debug));
    }
}
