//! Wire representation of recipes as exchanged with the backend. Kept apart
//! from the domain types: the client-side ingredient key never crosses the
//! wire, and the server-assigned id only appears on responses.

use serde::{Deserialize, Serialize};

use crate::recipe::{Ingredient, Quantity, Recipe};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityExternal {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientExternal {
    pub name: String,
    pub quantity: QuantityExternal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeExternal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientExternal>,
}

impl From<&Ingredient> for IngredientExternal {
    fn from(i: &Ingredient) -> IngredientExternal {
        IngredientExternal {
            name: i.name.clone(),
            quantity: QuantityExternal {
                value: i.quantity.value,
                unit: i.quantity.unit.clone(),
            },
        }
    }
}

impl From<&Recipe> for RecipeExternal {
    fn from(r: &Recipe) -> RecipeExternal {
        RecipeExternal {
            id: r.id.clone(),
            name: r.name.clone(),
            instructions: r.instructions.clone(),
            ingredients: r.ingredients.iter().map(IngredientExternal::from).collect(),
        }
    }
}

impl From<IngredientExternal> for Ingredient {
    fn from(i: IngredientExternal) -> Ingredient {
        // Ingested rows get fresh local keys.
        Ingredient::new(i.name, i.quantity.value, i.quantity.unit)
    }
}

impl From<RecipeExternal> for Recipe {
    fn from(r: RecipeExternal) -> Recipe {
        Recipe {
            id: r.id,
            name: r.name,
            instructions: r.instructions,
            ingredients: r.ingredients.into_iter().map(Ingredient::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_serializes_without_id_or_keys() {
        let draft = Recipe::draft("Soup", "Boil it", vec![Ingredient::new("Meat", 2.0, "mg")]);
        let json = serde_json::to_value(RecipeExternal::from(&draft)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Soup",
                "instructions": "Boil it",
                "ingredients": [
                    { "name": "Meat", "quantity": { "value": 2.0, "unit": "mg" } }
                ]
            })
        );
    }

    #[test]
    fn response_with_id_round_trips_into_domain() {
        let body = r#"{
            "id": "42",
            "name": "Soup",
            "instructions": "Boil it",
            "ingredients": [
                { "name": "Meat", "quantity": { "value": 2.0, "unit": "mg" } }
            ]
        }"#;

        let external: RecipeExternal = serde_json::from_str(body).unwrap();
        let recipe: Recipe = external.into();

        assert_eq!(recipe.id.as_deref(), Some("42"));
        assert_eq!(recipe.name, "Soup");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].quantity.unit, "mg");
    }

    #[test]
    fn response_without_ingredients_defaults_to_empty() {
        let body = r#"{ "id": "7", "name": "Tea", "instructions": "" }"#;
        let external: RecipeExternal = serde_json::from_str(body).unwrap();
        assert!(external.ingredients.is_empty());
    }
}
