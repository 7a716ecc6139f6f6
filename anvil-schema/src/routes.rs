use serde::Deserialize;

/// Default route registry location, relative to the project directory.
pub const DEFAULT_ROUTES_PATH: &str = "app/routes.php";

/// Default resource route declaration.
///
/// Rendered with `collection` (e.g. `orders`) and `controller`
/// (e.g. `Orders`).
pub const DEFAULT_ROUTE_STATEMENT: &str =
    "Route::resource('{{ collection }}', '{{ controller }}Controller');";

/// The `routes` section: where resource routes are registered after a scaffold.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouteConfig {
    pub path: String,
    pub statement: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_ROUTES_PATH.to_string(),
            statement: DEFAULT_ROUTE_STATEMENT.to_string(),
        }
    }
}

/// Default directory marking a project root.
pub const DEFAULT_LOADER_MARKER: &str = "vendor";

/// Default dependency loader, relative to the project root.
pub const DEFAULT_LOADER_FILE: &str = "vendor/autoload.php";

/// The `model_loader` section: how the project owning a model is located.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModelLoaderConfig {
    /// Directory whose presence marks the project root
    pub marker: String,
    /// Loader file that must exist under the project root
    pub loader: String,
}

impl Default for ModelLoaderConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_LOADER_MARKER.to_string(),
            loader: DEFAULT_LOADER_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_defaults() {
        let routes: RouteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(routes, RouteConfig::default());
        assert_eq!(routes.path, "app/routes.php");
    }

    #[test]
    fn test_route_partial_override() {
        let routes: RouteConfig = serde_json::from_str(r#"{ "path": "routes/web.php" }"#).unwrap();
        assert_eq!(routes.path, "routes/web.php");
        assert_eq!(routes.statement, DEFAULT_ROUTE_STATEMENT);
    }

    #[test]
    fn test_loader_defaults() {
        let loader: ModelLoaderConfig = toml::from_str("").unwrap();
        assert_eq!(loader.marker, "vendor");
        assert_eq!(loader.loader, "vendor/autoload.php");
    }
}
