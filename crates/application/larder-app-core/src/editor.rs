use larder_core::{Ingredient, IngredientKey};

/// Structured outcome of the ingredient editor dialog, matched exhaustively
/// by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    /// Dialog dismissed without action; the list is left alone.
    Dismissed,
    /// Replace the entry with the same key, or append when the key is new.
    Upsert(Ingredient),
    /// Remove the entry with this key, if present.
    Delete(IngredientKey),
}

pub fn merge_outcome(ingredients: &mut Vec<Ingredient>, outcome: EditorOutcome) {
    match outcome {
        EditorOutcome::Dismissed => {}
        EditorOutcome::Upsert(ingredient) => {
            if let Some(ix) = ingredients.iter().position(|i| i.key == ingredient.key) {
                ingredients[ix] = ingredient;
            } else {
                ingredients.push(ingredient);
            }
        }
        EditorOutcome::Delete(key) => ingredients.retain(|i| i.key != key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::Quantity;

    #[test]
    fn upsert_with_a_fresh_key_appends() {
        let mut list = vec![Ingredient::new("Meat", 2.0, "mg")];
        merge_outcome(&mut list, EditorOutcome::Upsert(Ingredient::new("Salt", 1.0, "g")));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "Salt");
    }

    #[test]
    fn upsert_with_a_known_key_replaces_in_place() {
        let original = Ingredient::new("Meat", 2.0, "mg");
        let mut list = vec![original.clone(), Ingredient::new("Salt", 1.0, "g")];

        let edited = Ingredient {
            key: original.key,
            name: "Beef".into(),
            quantity: Quantity {
                value: 3.0,
                unit: "kg".into(),
            },
        };
        merge_outcome(&mut list, EditorOutcome::Upsert(edited));

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Beef");
        assert_eq!(list[0].key, original.key);
    }

    #[test]
    fn delete_removes_only_the_keyed_entry() {
        let target = Ingredient::new("Meat", 2.0, "mg");
        let mut list = vec![target.clone(), Ingredient::new("Meat", 2.0, "mg")];
        merge_outcome(&mut list, EditorOutcome::Delete(target.key));
        assert_eq!(list.len(), 1);
        assert_ne!(list[0].key, target.key);
    }

    #[test]
    fn delete_with_an_unknown_key_is_a_no_op() {
        let mut list = vec![Ingredient::new("Meat", 2.0, "mg")];
        merge_outcome(&mut list, EditorOutcome::Delete(uuid::Uuid::new_v4()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn dismissed_leaves_the_list_unchanged() {
        let mut list = vec![Ingredient::new("Meat", 2.0, "mg")];
        let before = list.clone();
        merge_outcome(&mut list, EditorOutcome::Dismissed);
        assert_eq!(list, before);
    }
}
