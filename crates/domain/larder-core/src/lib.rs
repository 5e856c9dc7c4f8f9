pub mod recipe;
pub mod validate;
pub mod wire;

pub use recipe::{Ingredient, IngredientKey, Quantity, Recipe, RecipeId};
pub use validate::{field_is_clean, invalid_characters_message};
pub use wire::{IngredientExternal, QuantityExternal, RecipeExternal};
