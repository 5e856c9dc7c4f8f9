use uuid::Uuid;

/// Identifier assigned by the server when a recipe is created.
pub type RecipeId = String;

/// Stable client-side identity for an ingredient row. Generated locally so
/// that edit and delete address a specific entry even when two rows carry
/// the same name.
pub type IngredientKey = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub key: IngredientKey,
    pub name: String,
    pub quantity: Quantity,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            name: name.into(),
            quantity: Quantity {
                value,
                unit: unit.into(),
            },
        }
    }
}

/// A recipe record. `id` is `None` until the server assigns one; a recipe
/// with `id: None` is a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Option<RecipeId>,
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn draft(
        name: impl Into<String>,
        instructions: impl Into<String>,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            instructions: instructions.into(),
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ingredients_get_distinct_keys() {
        let a = Ingredient::new("Salt", 1.0, "g");
        let b = Ingredient::new("Salt", 1.0, "g");
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn draft_has_no_id() {
        let draft = Recipe::draft("Soup", "Boil it", vec![]);
        assert!(draft.id.is_none());
    }
}
