//! App layout tree patching
//!
//! The host framework round-trips the component tree as JSON: objects with
//! `props`, `children`, and `id` keys, nested arbitrarily. Before a snapshot
//! is saved or after one is loaded, individual components need their props
//! patched (close the share modal, reset a timer, drop transient values).
//! [`update_component_state`] walks the tree and merges patches into every
//! component whose id matches.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{Result, layout_structure_invalid};

/// A serialized component tree as the host round-trips it
pub type AppLayout = Value;

/// Prop patches keyed by component id
///
/// Ids are normalized with `-` replaced by `_` on both sides, so
/// `"save-modal"` and `"save_modal"` address the same component.
#[derive(Debug, Clone, Default)]
pub struct ComponentUpdates {
    patches: HashMap<String, Map<String, Value>>,
}

impl ComponentUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop patch for one component
    pub fn insert(&mut self, id: impl AsRef<str>, props: Map<String, Value>) -> &mut Self {
        self.patches.insert(normalize_id(id.as_ref()), props);
        self
    }

    /// Convenience: patch a single prop of one component
    pub fn set(&mut self, id: impl AsRef<str>, prop: impl Into<String>, value: Value) -> &mut Self {
        self.patches
            .entry(normalize_id(id.as_ref()))
            .or_default()
            .insert(prop.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    fn get(&self, id: &str) -> Option<&Map<String, Value>> {
        self.patches.get(&normalize_id(id))
    }
}

fn normalize_id(id: &str) -> String {
    id.replace('-', "_")
}

/// Recursively apply prop patches to a layout tree.
///
/// Objects are descended through their `children` and `props` values; an
/// object whose `id` matches a patch gets the patch entries merged in
/// (overwriting existing keys). Arrays are component lists: every element
/// must be an object carrying a `props` object, anything else is an
/// unexpected app structure. Strings and nulls pass through untouched.
pub fn update_component_state(layout: &mut AppLayout, updates: &ComponentUpdates) -> Result<()> {
    if updates.is_empty() {
        return Ok(());
    }
    walk(layout, updates, true)
}

fn walk(node: &mut Value, updates: &ComponentUpdates, root: bool) -> Result<()> {
    match node {
        Value::Object(obj) => {
            if let Some(children) = obj.get_mut("children") {
                walk(children, updates, false)?;
            }
            if let Some(props) = obj.get_mut("props") {
                walk(props, updates, false)?;
            }
            let patch = obj
                .get("id")
                .and_then(Value::as_str)
                .and_then(|id| updates.get(id))
                .cloned();
            if let Some(patch) = patch {
                for (key, value) in patch {
                    obj.insert(key, value);
                }
            }
            Ok(())
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                // Component lists hold objects with a props record
                if root && !matches!(item, Value::Object(obj) if obj.contains_key("props")) {
                    return Err(layout_structure_invalid(
                        "layout list item is not a component with props",
                    ));
                }
                walk(item, updates, false)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patch(id: &str, prop: &str, value: Value) -> ComponentUpdates {
        let mut updates = ComponentUpdates::new();
        updates.set(id, prop, value);
        updates
    }

    #[test]
    fn test_update_top_level_component() {
        let mut layout = json!([
            {"props": {"id": "test1", "children": "old"}},
            {"props": {"id": "test2", "children": "keep"}}
        ]);

        update_component_state(&mut layout, &patch("test1", "children", json!("it worked!!!")))
            .unwrap();

        assert_eq!(layout[0]["props"]["children"], "it worked!!!");
        assert_eq!(layout[1]["props"]["children"], "keep");
    }

    #[test]
    fn test_update_nested_children() {
        let mut layout = json!([
            {"props": {"id": "outer", "children": [
                {"props": {"id": "inner", "value": 1}}
            ]}}
        ]);

        update_component_state(&mut layout, &patch("inner", "value", json!(42))).unwrap();
        assert_eq!(layout[0]["props"]["children"][0]["props"]["value"], 42);
    }

    #[test]
    fn test_hyphen_underscore_normalization() {
        let mut layout = json!([
            {"props": {"id": "save-modal", "is_open": true}}
        ]);

        update_component_state(&mut layout, &patch("save_modal", "is_open", json!(false)))
            .unwrap();
        assert_eq!(layout[0]["props"]["is_open"], false);
    }

    #[test]
    fn test_update_object_layout() {
        let mut layout = json!({
            "props": {
                "id": "app-layout",
                "children": {"props": {"id": "graph", "figure": {"data": []}}}
            }
        });

        let mut updates = ComponentUpdates::new();
        updates.set("graph", "figure", json!({"data": [1, 2]}));
        update_component_state(&mut layout, &updates).unwrap();

        assert_eq!(
            layout["props"]["children"]["props"]["figure"],
            json!({"data": [1, 2]})
        );
    }

    #[test]
    fn test_no_updates_is_noop() {
        let original = json!([{"props": {"id": "a"}}]);
        let mut layout = original.clone();
        update_component_state(&mut layout, &ComponentUpdates::new()).unwrap();
        assert_eq!(layout, original);
    }

    #[test]
    fn test_string_and_null_nodes_untouched() {
        let mut layout = json!({"props": {"id": "a", "children": "plain text"}});
        update_component_state(&mut layout, &patch("b", "x", json!(1))).unwrap();
        assert_eq!(layout["props"]["children"], "plain text");

        let mut layout = Value::Null;
        update_component_state(&mut layout, &patch("b", "x", json!(1))).unwrap();
        assert!(layout.is_null());
    }

    #[test]
    fn test_unexpected_structure_errors() {
        let mut layout = json!(["just a string"]);
        let err = update_component_state(&mut layout, &patch("a", "x", json!(1))).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ShareError::LayoutStructureInvalid { .. }
        ));
    }

    #[test]
    fn test_patch_overwrites_existing_props() {
        let mut layout = json!([
            {"props": {"id": "timer", "disabled": true, "n_intervals": 3}}
        ]);

        let mut updates = ComponentUpdates::new();
        let mut props = Map::new();
        props.insert("disabled".to_string(), json!(false));
        props.insert("n_intervals".to_string(), json!(0));
        updates.insert("timer", props);

        update_component_state(&mut layout, &updates).unwrap();
        assert_eq!(layout[0]["props"]["disabled"], false);
        assert_eq!(layout[0]["props"]["n_intervals"], 0);
    }
}
