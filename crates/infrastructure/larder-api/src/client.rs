use std::time::Duration;

use async_trait::async_trait;
use larder_core::wire::RecipeExternal;
use larder_core::{Recipe, RecipeId};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid api base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("created recipe response is missing an id")]
    MissingId,
}

/// Port for the recipe backend. One call per operation, no retries, no
/// caching; a failed call surfaces as an `ApiError` the caller must handle.
#[async_trait]
pub trait RecipeBackend: Send + Sync + 'static {
    async fn create_recipe(&self, draft: &Recipe) -> Result<Recipe, ApiError>;
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;
    async fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, ApiError>;
}

/// HTTP client configured with the timeouts from `larder-config`.
pub fn default_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(larder_config::HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(larder_config::HTTP_REQUEST_TIMEOUT_SECS))
        .build()
}

/// Normalize a base URL into a *directory base* so `Url::join` appends
/// instead of replacing the last path segment. `https://host/api` and
/// `https://host/api/` both resolve `recipes` to `https://host/api/recipes`.
pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }

    Ok(url)
}

/// reqwest-backed implementation of [`RecipeBackend`].
pub struct HttpRecipeBackend {
    client: Client,
    base: Url,
}

impl HttpRecipeBackend {
    pub fn new(client: Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client,
            base: normalize_base_url(base_url)?,
        })
    }

    /// Build against the configured base URL (`LARDER_API_URL` override,
    /// default otherwise).
    pub fn from_env() -> Result<Self, ApiError> {
        let base = larder_config::api_base_url();
        let client = default_http_client().map_err(|e| ApiError::InvalidBaseUrl {
            url: base.clone(),
            reason: format!("failed to build http client: {e}"),
        })?;
        Self::new(client, &base)
    }

    fn recipes_url(&self) -> Result<Url, ApiError> {
        self.base.join("recipes").map_err(|e| ApiError::InvalidBaseUrl {
            url: self.base.to_string(),
            reason: e.to_string(),
        })
    }

    fn recipe_url(&self, id: &RecipeId) -> Result<Url, ApiError> {
        let mut url = self.recipes_url()?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: "cannot be a base".into(),
            })?
            .push(id);
        Ok(url)
    }

    async fn fetch_json(&self, url: Url) -> Result<RecipeExternal, ApiError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status(),
                url: url.to_string(),
            });
        }

        resp.json().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl RecipeBackend for HttpRecipeBackend {
    async fn create_recipe(&self, draft: &Recipe) -> Result<Recipe, ApiError> {
        let url = self.recipes_url()?;
        let payload = RecipeExternal::from(draft);
        debug!("POST {url} ({} ingredients)", draft.ingredients.len());

        let resp = self
            .client
            .post(url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status(),
                url: url.to_string(),
            });
        }

        let external: RecipeExternal = resp.json().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        let created: Recipe = external.into();
        if created.id.is_none() {
            return Err(ApiError::MissingId);
        }
        Ok(created)
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = self.recipes_url()?;
        debug!("GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status(),
                url: url.to_string(),
            });
        }

        let externals: Vec<RecipeExternal> = resp.json().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        Ok(externals.into_iter().map(Recipe::from).collect())
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, ApiError> {
        let url = self.recipe_url(id)?;
        debug!("GET {url}");
        Ok(self.fetch_json(url).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_without_trailing_slash_is_treated_as_directory() {
        let base = normalize_base_url("http://localhost:8080").unwrap();
        assert_eq!(base.join("recipes").unwrap().as_str(), "http://localhost:8080/recipes");

        let base = normalize_base_url("http://localhost:8080/api").unwrap();
        assert_eq!(
            base.join("recipes").unwrap().as_str(),
            "http://localhost:8080/api/recipes"
        );
    }

    #[test]
    fn trailing_slash_base_resolves_the_same() {
        let a = normalize_base_url("http://localhost:8080/api").unwrap();
        let b = normalize_base_url("http://localhost:8080/api/").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn recipe_url_appends_the_id_as_a_segment() {
        let backend =
            HttpRecipeBackend::new(Client::new(), "http://localhost:8080").unwrap();
        let url = backend.recipe_url(&"42".to_string()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/recipes/42");
    }
}
