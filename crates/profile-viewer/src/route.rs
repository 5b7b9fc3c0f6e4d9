//! Maps the page path to a player identifier and back.

/// Last non-empty segment of `path`, or `default` when there is none.
///
/// Query strings and fragments are ignored.
pub fn identifier_from_path<'a>(path: &'a str, default: &'a str) -> &'a str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or(default)
}

/// Whether `identifier` survives a round trip through [`Route::navigate`].
///
/// Separators would split it or hide it behind a query or fragment.
pub fn is_path_segment(identifier: &str) -> bool {
    let identifier = identifier.trim();
    !identifier.is_empty() && !identifier.contains(['/', '?', '#'])
}

/// The current page path. Navigating rewrites it without reloading anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    default_identifier: String,
}

impl Route {
    pub fn new(path: impl Into<String>, default_identifier: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default_identifier: default_identifier.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn identifier(&self) -> &str {
        identifier_from_path(&self.path, &self.default_identifier)
    }

    pub fn navigate(&mut self, identifier: &str) {
        self.path = format!("/{}", identifier.trim());
    }
}
