//! Client-side route table: the mapping from navigation paths to views.
//!
//! Two routes exist, the user table at `/` and the user detail page at
//! `/user/:username`, declared once and immutable for the lifetime of the
//! process. [`resolve`] answers which view a path addresses and which path
//! parameters are forwarded to it. It performs no navigation itself.

/// Views addressable from the route table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum View {
    UserTable,
    UserDetail,
}

/// One route entry: path pattern, stable route name, target view, and whether
/// captured path parameters are forwarded to the view as inputs.
#[derive(Debug, Eq, PartialEq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub pass_params: bool,
}

/// The application routes. `:segment` patterns capture one path segment.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Home",
        view: View::UserTable,
        pass_params: false,
    },
    Route {
        path: "/user/:username",
        name: "UserDetail",
        view: View::UserDetail,
        pass_params: true,
    },
];

/// A resolved route plus the parameters forwarded to its view.
#[derive(Debug, Eq, PartialEq)]
pub struct RouteMatch {
    pub route: &'static Route,
    params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    /// Looks up a forwarded parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All forwarded parameters, in pattern order.
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Resolves a navigation path against the route table.
///
/// Matching is segment-wise: literal segments compare exactly and `:name`
/// segments capture any single non-empty segment. Query and fragment parts
/// are ignored and one trailing slash is tolerated; empty segments left by
/// doubled slashes never match. Paths that do not start with `/` never
/// match.
#[must_use]
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = strip_query_and_fragment(path);
    if !path.starts_with('/') {
        return None;
    }

    ROUTES.iter().find_map(|route| match_route(route, path))
}

fn strip_query_and_fragment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn match_route(route: &'static Route, path: &str) -> Option<RouteMatch> {
    let pattern = segments(route.path)?;
    let given = segments(path)?;

    if pattern.len() != given.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern.iter().zip(&given) {
        match expected.strip_prefix(':') {
            Some(name) => params.push((name, (*actual).to_string())),
            None if expected == actual => {}
            None => return None,
        }
    }

    // Captures stay internal unless the route forwards them
    if !route.pass_params {
        params.clear();
    }

    Some(RouteMatch { route, params })
}

fn segments(path: &str) -> Option<Vec<&str>> {
    let mut segments: Vec<&str> = path.strip_prefix('/')?.split('/').collect();

    // One trailing slash is tolerated, any other empty segment rejects the path
    if segments.last() == Some(&"") {
        segments.pop();
    }
    if segments.contains(&"") {
        return None;
    }

    Some(segments)
}
