// ABOUTME: History-mode router over the route table
// ABOUTME: Resolves browser locations to views and renders locations back from views

use multiboard_config::RouteSettings;
use std::collections::BTreeMap;
use tracing::debug;

use crate::route::{build_routes, RouteEntry};
use crate::view::View;

/// Path parameters captured from a location, keyed by segment name
pub type Params = BTreeMap<String, String>;

/// History-mode navigation rooted at a base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    base: String,
}

impl History {
    /// `"/"` and `""` both mean the site root; trailing slashes are dropped
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Location relative to the base, or `None` if it lives outside it
    fn strip<'a>(&self, location: &'a str) -> Option<&'a str> {
        let rest = location.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// A successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteEntry,
    pub params: Params,
}

#[derive(Debug, Clone)]
pub struct Router {
    history: History,
    routes: Vec<RouteEntry>,
}

/// Build the route table and register history navigation at the configured base
pub fn create_router(settings: &RouteSettings) -> Router {
    let router = Router {
        history: History::new(&settings.base_url),
        routes: build_routes(settings),
    };
    debug!(
        "Registered {} routes under base '{}'",
        router.routes.len(),
        router.history.base()
    );
    router
}

impl Router {
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// First entry bound to `view`
    pub fn route(&self, view: View) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.view() == view)
    }

    /// Match a location against the table in order.
    ///
    /// Query strings and fragments are ignored. A single trailing slash is
    /// tolerated.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_>> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let relative = self.history.strip(path)?;
        let relative = if relative.len() > 1 {
            relative.strip_suffix('/').unwrap_or(relative)
        } else {
            relative
        };

        let found = self.routes.iter().find_map(|route| {
            match_pattern(route.path(), relative).map(|params| RouteMatch { route, params })
        });

        match &found {
            Some(m) => debug!("Resolved '{}' to {}", location, m.route.name()),
            None => debug!("No route matches '{}'", location),
        }
        found
    }

    /// Render a full location for `view`, substituting `params` into dynamic
    /// segments. `None` when the view has no route or a parameter is missing.
    pub fn href(&self, view: View, params: &Params) -> Option<String> {
        let route = self.route(view)?;
        let rendered = route
            .path()
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => params.get(name).map(String::as_str),
                None => Some(segment),
            })
            .collect::<Option<Vec<&str>>>()?
            .join("/");
        Some(self.history.join(&rendered))
    }
}

fn match_pattern(pattern: &str, path: &str) -> Option<Params> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Params::new();
    for (expected, actual) in pattern_segments.iter().zip(&path_segments) {
        match expected.strip_prefix(':') {
            Some(name) if !name.is_empty() => {
                if actual.is_empty() {
                    return None;
                }
                params.insert(name.to_string(), actual.to_string());
            }
            _ if expected == actual => {}
            _ => return None,
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_base_normalization() {
        assert_eq!(History::new("/").base(), "");
        assert_eq!(History::new("").base(), "");
        assert_eq!(History::new("/app/").base(), "/app");
        assert_eq!(History::new("app").base(), "/app");
    }

    #[test]
    fn test_history_strip() {
        let history = History::new("/app");
        assert_eq!(history.strip("/app"), Some("/"));
        assert_eq!(history.strip("/app/login"), Some("/login"));
        assert_eq!(history.strip("/application"), None);
        assert_eq!(history.strip("/other"), None);
    }

    #[test]
    fn test_match_pattern_static_and_dynamic() {
        assert_eq!(match_pattern("/login", "/login"), Some(Params::new()));
        assert_eq!(match_pattern("/login", "/signup"), None);

        let params = match_pattern("/boards/free/:boardId", "/boards/free/7").unwrap();
        assert_eq!(params.get("boardId").map(String::as_str), Some("7"));

        assert_eq!(match_pattern("/boards/free/:boardId", "/boards/free/"), None);
        assert_eq!(match_pattern("/boards/free/:boardId", "/boards/free"), None);
    }

    #[test]
    fn test_empty_pattern_never_matches_root() {
        assert_eq!(match_pattern("", "/"), None);
    }
}
