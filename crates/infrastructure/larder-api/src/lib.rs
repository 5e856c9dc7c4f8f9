pub mod client;

// Re-exports for convenience
pub use client::{default_http_client, ApiError, HttpRecipeBackend, RecipeBackend};
