//! Recipe Progress Tracking
//!
//! Persists which checklist items a reader has ticked, per recipe.
//! Storage layout is one JSON object per checklist kind:
//! `{ "<recipe id>": ["<item id>", ...] }`.

use std::collections::BTreeMap;

use crate::checklist::ChecklistKind;
use crate::config::StorageKeys;
use crate::error::UiError;
use crate::storage::KeyValueStore;

type ProgressMap = BTreeMap<String, Vec<String>>;

/// Trailing non-empty path segment, e.g. `/recipes/42/` -> `42`
pub fn recipe_id_from_path(path: &str) -> Option<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

/// Progress store bound to one recipe page
pub struct ProgressTracker<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
    recipe_id: String,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    pub fn new(store: S, keys: StorageKeys, recipe_id: impl Into<String>) -> Self {
        Self {
            store,
            keys,
            recipe_id: recipe_id.into(),
        }
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    fn key(&self, kind: ChecklistKind) -> &str {
        match kind {
            ChecklistKind::Ingredient => &self.keys.checked_ingredients,
            ChecklistKind::Instruction => &self.keys.completed_steps,
        }
    }

    /// Whole mapping for a kind; absent or malformed data reads as empty
    fn read_map(&self, kind: ChecklistKind) -> ProgressMap {
        let key = self.key(kind);
        let Some(raw) = self.store.get(key) else {
            return ProgressMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("[progress] ignoring malformed {}: {}", key, e);
            ProgressMap::new()
        })
    }

    /// Item ids stored for this recipe
    pub fn load(&self, kind: ChecklistKind) -> Vec<String> {
        self.read_map(kind).remove(&self.recipe_id).unwrap_or_default()
    }

    /// Route a checkbox change to the list it belongs to
    pub fn toggle(&self, kind: ChecklistKind, item_id: &str, checked: bool) -> Result<(), UiError> {
        match kind {
            ChecklistKind::Ingredient => self.toggle_ingredient(item_id, checked),
            ChecklistKind::Instruction => self.toggle_instruction(item_id, checked),
        }
    }

    pub fn toggle_ingredient(&self, item_id: &str, checked: bool) -> Result<(), UiError> {
        self.write_toggle(ChecklistKind::Ingredient, item_id, checked)
    }

    pub fn toggle_instruction(&self, item_id: &str, checked: bool) -> Result<(), UiError> {
        self.write_toggle(ChecklistKind::Instruction, item_id, checked)
    }

    /// Record `item_id` as checked or unchecked and write the mapping back
    fn write_toggle(&self, kind: ChecklistKind, item_id: &str, checked: bool) -> Result<(), UiError> {
        let mut map = self.read_map(kind);
        let ids = map.entry(self.recipe_id.clone()).or_default();
        if checked {
            if !ids.iter().any(|id| id == item_id) {
                ids.push(item_id.to_string());
            }
        } else {
            ids.retain(|id| id != item_id);
        }
        let raw = serde_json::to_string(&map)?;
        self.store.set(self.key(kind), &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::parse_checklist;
    use crate::storage::MemoryStore;

    fn tracker(store: MemoryStore, recipe: &str) -> ProgressTracker<MemoryStore> {
        ProgressTracker::new(store, StorageKeys::default(), recipe)
    }

    #[test]
    fn test_recipe_id_from_path() {
        assert_eq!(recipe_id_from_path("/recipes/42/").as_deref(), Some("42"));
        assert_eq!(recipe_id_from_path("/recipes/apple-pie").as_deref(), Some("apple-pie"));
        assert_eq!(recipe_id_from_path("/"), None);
        assert_eq!(recipe_id_from_path(""), None);
    }

    #[test]
    fn test_toggle_checked_twice_is_idempotent() {
        let t = tracker(MemoryStore::default(), "42");
        t.toggle_ingredient("ingredient-eggs", true).unwrap();
        t.toggle_ingredient("ingredient-eggs", true).unwrap();
        assert_eq!(t.load(ChecklistKind::Ingredient), vec!["ingredient-eggs"]);
    }

    #[test]
    fn test_uncheck_removes_id() {
        let t = tracker(MemoryStore::default(), "42");
        t.toggle_instruction("instruction-stir", true).unwrap();
        t.toggle_instruction("instruction-bake", true).unwrap();
        t.toggle_instruction("instruction-stir", false).unwrap();
        assert_eq!(t.load(ChecklistKind::Instruction), vec!["instruction-bake"]);
        assert!(t.load(ChecklistKind::Ingredient).is_empty());
    }

    #[test]
    fn test_toggle_by_kind_writes_matching_key() {
        let t = tracker(MemoryStore::default(), "42");
        t.toggle(ChecklistKind::Instruction, "instruction-bake", true).unwrap();
        t.toggle(ChecklistKind::Ingredient, "ingredient-flour", true).unwrap();
        let steps: ProgressMap = serde_json::from_str(&t.store.get("completedSteps").unwrap()).unwrap();
        let ingredients: ProgressMap = serde_json::from_str(&t.store.get("checkedIngredients").unwrap()).unwrap();
        assert_eq!(steps["42"], vec!["instruction-bake"]);
        assert_eq!(ingredients["42"], vec!["ingredient-flour"]);
    }

    #[test]
    fn test_other_recipes_are_preserved() {
        let store = MemoryStore::with("checkedIngredients", r#"{"7":["ingredient-salt"]}"#);
        let t = tracker(store, "42");
        t.toggle_ingredient("ingredient-eggs", true).unwrap();
        let raw = t.store.get("checkedIngredients").unwrap();
        let map: ProgressMap = serde_json::from_str(&raw).unwrap();
        assert_eq!(map["7"], vec!["ingredient-salt"]);
        assert_eq!(map["42"], vec!["ingredient-eggs"]);
    }

    #[test]
    fn test_malformed_storage_reads_as_empty() {
        let t = tracker(MemoryStore::with("completedSteps", "{not json"), "42");
        assert!(t.load(ChecklistKind::Instruction).is_empty());
        // and a toggle replaces the garbage with a valid mapping
        t.toggle_instruction("instruction-stir", true).unwrap();
        assert_eq!(t.load(ChecklistKind::Instruction), vec!["instruction-stir"]);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let t = tracker(MemoryStore::full(), "42");
        let err = t.toggle_ingredient("ingredient-eggs", true).unwrap_err();
        assert!(matches!(err, UiError::Storage(_)));
    }

    #[test]
    fn test_reload_restores_two_of_three_ingredients() {
        let items = parse_checklist(ChecklistKind::Ingredient, "eggs\nmilk\nsugar");
        let t = tracker(MemoryStore::default(), "pancakes");
        t.toggle_ingredient(&items[0].id, true).unwrap();
        t.toggle_ingredient(&items[2].id, true).unwrap();

        let reloaded = tracker(t.store, "pancakes");
        let checked = reloaded.load(ChecklistKind::Ingredient);
        let states: Vec<bool> = items.iter().map(|i| checked.contains(&i.id)).collect();
        assert_eq!(states, vec![true, false, true]);
    }
}
