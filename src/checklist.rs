//! Checklist Parsing
//!
//! Splits server-rendered ingredient/instruction text into checklist items.
//! Item ids come from the item text, so stored progress follows a line even
//! if the recipe author reorders the list.

use std::collections::HashMap;

/// Which checklist an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecklistKind {
    Ingredient,
    Instruction,
}

impl ChecklistKind {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ChecklistKind::Ingredient => "ingredient",
            ChecklistKind::Instruction => "instruction",
        }
    }

    /// Strip list decoration the author typed by hand
    fn clean<'a>(&self, line: &'a str) -> &'a str {
        let line = line.trim();
        let rest = match self {
            ChecklistKind::Ingredient => line.trim_start_matches(['-', '•', '*']),
            ChecklistKind::Instruction => {
                let digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
                match digits.strip_prefix('.') {
                    Some(after) if digits.len() < line.len() => after,
                    _ => line,
                }
            }
        };
        rest.trim_start()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    /// DOM id of the checkbox, also the persisted identifier
    pub id: String,
    pub text: String,
    /// 1-based position for step numbering
    pub number: usize,
}

/// Parse raw multi-line text into checklist items, skipping blank lines
pub fn parse_checklist(kind: ChecklistKind, raw: &str) -> Vec<ChecklistItem> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut items = Vec::new();

    for line in raw.lines() {
        let text = kind.clean(line);
        if text.is_empty() {
            continue;
        }
        let base = format!("{}-{}", kind.id_prefix(), slug(text));
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        let id = if *count == 1 { base } else { format!("{}-{}", base, count) };
        items.push(ChecklistItem {
            id,
            text: text.to_string(),
            number: items.len() + 1,
        });
    }
    items
}

/// Lowercase alphanumeric words joined by '-'
fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        out.push_str("item");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_strip_bullets_and_blank_lines() {
        let raw = "- 2 cups Flour\n\n• 1 tsp salt\n* Butter, softened\n   \n";
        let items = parse_checklist(ChecklistKind::Ingredient, raw);
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["2 cups Flour", "1 tsp salt", "Butter, softened"]);
        assert_eq!(items[0].id, "ingredient-2-cups-flour");
        assert_eq!(items[2].id, "ingredient-butter-softened");
        assert_eq!(items[2].number, 3);
    }

    #[test]
    fn test_instructions_strip_numbering() {
        let raw = "1. Preheat oven\n2.Mix everything\n10 minutes rest";
        let items = parse_checklist(ChecklistKind::Instruction, raw);
        assert_eq!(items[0].text, "Preheat oven");
        assert_eq!(items[1].text, "Mix everything");
        // no dot after the digits, so not a step number
        assert_eq!(items[2].text, "10 minutes rest");
        assert_eq!(items[1].id, "instruction-mix-everything");
    }

    #[test]
    fn test_ids_survive_reordering() {
        let before = parse_checklist(ChecklistKind::Ingredient, "eggs\nmilk\nsugar");
        let after = parse_checklist(ChecklistKind::Ingredient, "sugar\neggs\nmilk");
        let milk_before = before.iter().find(|i| i.text == "milk").unwrap();
        let milk_after = after.iter().find(|i| i.text == "milk").unwrap();
        assert_eq!(milk_before.id, milk_after.id);
    }

    #[test]
    fn test_duplicate_lines_get_distinct_ids() {
        let items = parse_checklist(ChecklistKind::Instruction, "Stir\nWait\nStir");
        assert_eq!(items[0].id, "instruction-stir");
        assert_eq!(items[2].id, "instruction-stir-2");
    }

    #[test]
    fn test_symbol_only_line_gets_placeholder_slug() {
        let items = parse_checklist(ChecklistKind::Ingredient, "- ???");
        assert_eq!(items[0].id, "ingredient-item");
    }
}
