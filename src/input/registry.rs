//! Name-to-factory registry for shape tools.

use super::shape_tool::ShapeTool;
use super::style::ToolStyle;
use super::tool::{PolylineTool, TriangleTool};
use log::{debug, warn};
use std::collections::BTreeMap;
use thiserror::Error;

/// Constructs a fresh, unselected tool instance.
pub type ToolFactory = fn(&ToolStyle) -> Box<dyn ShapeTool>;

/// Errors raised when looking up a tool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("unknown tool '{name}' (available: {available})")]
    UnknownTool { name: String, available: String },
}

/// Static mapping from lowercase tool names to factories.
///
/// Populated by explicit [`register`](Self::register) calls at start-up.
#[derive(Default)]
pub struct ToolRegistry {
    factories: BTreeMap<String, ToolFactory>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `line` and `triangle` registered.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register(PolylineTool::NAME, PolylineTool::boxed);
        registry.register(TriangleTool::NAME, TriangleTool::boxed);
        registry
    }

    /// Registers `factory` under `name` (lowercased). Replaces an existing entry.
    pub fn register(&mut self, name: &str, factory: ToolFactory) {
        let name = name.to_lowercase();
        if self.factories.insert(name.clone(), factory).is_some() {
            warn!("Tool '{name}' registered twice; keeping the latest factory");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Builds a new tool instance.
    ///
    /// # Errors
    /// Returns [`ToolError::UnknownTool`] if nothing is registered under `name`.
    pub fn create(&self, name: &str, style: &ToolStyle) -> Result<Box<dyn ShapeTool>, ToolError> {
        let factory = self
            .factories
            .get(&name.to_lowercase())
            .ok_or_else(|| ToolError::UnknownTool {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })?;

        debug!("Creating '{name}' tool");
        Ok(factory(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::EditMode;

    #[test]
    fn builtin_registry_lists_tools_sorted() {
        let registry = ToolRegistry::with_builtin_tools();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["line", "triangle"]);
    }

    #[test]
    fn create_returns_fresh_tool_of_requested_kind() {
        let registry = ToolRegistry::with_builtin_tools();
        let tool = registry
            .create("Triangle", &ToolStyle::default())
            .expect("triangle registered");

        assert_eq!(tool.name(), "triangle");
        assert_eq!(tool.mode(), EditMode::Draw);
        assert!(tool.vertices().is_empty());
        assert!(!tool.is_selected());
    }

    #[test]
    fn create_unknown_tool_reports_available_names() {
        let registry = ToolRegistry::with_builtin_tools();
        let err = registry
            .create("hexagon", &ToolStyle::default())
            .err()
            .expect("hexagon is not registered");

        assert_eq!(
            err,
            ToolError::UnknownTool {
                name: "hexagon".to_string(),
                available: "line, triangle".to_string(),
            }
        );
        assert!(err.to_string().contains("line, triangle"));
    }

    #[test]
    fn register_replaces_existing_factory() {
        let mut registry = ToolRegistry::new();
        registry.register("shape", PolylineTool::boxed);
        registry.register("SHAPE", TriangleTool::boxed);

        let tool = registry.create("shape", &ToolStyle::default()).unwrap();
        assert_eq!(tool.name(), "triangle");
        assert!(registry.contains("Shape"));
    }
}
