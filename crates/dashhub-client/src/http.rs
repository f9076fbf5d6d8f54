//! HTTP implementation of the content repository.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use async_trait::async_trait;

use dashhub_core::config::api::ApiConfig;
use dashhub_core::error::AppError;
use dashhub_core::result::AppResult;
use dashhub_core::types::ItemId;
use dashhub_entity::{FilterState, FilteredList, FolderContents, ItemKind};

use crate::repository::{ContentRepository, CreateDashboardRequest, CreateFolderRequest};

/// Content repository backed by the dashboards REST API.
#[derive(Debug, Clone)]
pub struct HttpContentRepository {
    /// Shared HTTP client.
    client: Client,
    /// Backend base URL, without a trailing slash.
    base_url: String,
}

/// Body shape of a create response.
#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: ItemId,
}

/// Body shape of a favorite-toggle response.
#[derive(Debug, Deserialize)]
struct FavoriteResponse {
    #[serde(rename = "isFavorite")]
    is_favorite: bool,
}

/// Body shape of a backend error.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl HttpContentRepository {
    /// Create a repository from API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response onto the error taxonomy.
    async fn error_from(response: Response) -> AppError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => format!("request failed with status {status}"),
        };
        match status {
            StatusCode::NOT_FOUND => AppError::not_found(message),
            StatusCode::CONFLICT => AppError::conflict(message),
            StatusCode::FORBIDDEN => AppError::forbidden(message),
            StatusCode::BAD_REQUEST => AppError::validation(message),
            _ => AppError::internal(message),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::with_source(
                dashhub_core::error::ErrorKind::Serialization,
                format!("Failed to decode response: {e}"),
                e,
            ))
    }

    async fn check(response: Response) -> AppResult<()> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    fn transport(err: reqwest::Error) -> AppError {
        AppError::with_source(
            dashhub_core::error::ErrorKind::Network,
            format!("Request failed: {err}"),
            err,
        )
    }
}

#[async_trait]
impl ContentRepository for HttpContentRepository {
    async fn get_folder_contents(
        &self,
        folder_id: &ItemId,
        folders_only: bool,
    ) -> AppResult<FolderContents> {
        let url = self.url(&format!("/api/dashboards/folders/{folder_id}"));
        debug!(%folder_id, folders_only, "Fetching folder contents");

        let mut request = self.client.get(&url);
        if folders_only {
            request = request.query(&[("foldersOnly", "true")]);
        }
        let response = request.send().await.map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn get_filtered_list(
        &self,
        folder_id: &ItemId,
        filters: &FilterState,
        kind: Option<ItemKind>,
    ) -> AppResult<FilteredList> {
        let mut params = vec![("folderId".to_string(), folder_id.to_string())];
        params.extend(filters.to_query_pairs());
        if let Some(kind) = kind {
            let value = match kind {
                ItemKind::Folder => "folder",
                ItemKind::Dashboard => "dashboard",
            };
            params.push(("type".to_string(), value.to_string()));
        }
        debug!(%folder_id, ?filters, "Fetching filtered list");

        let response = self
            .client
            .get(self.url("/api/dashboards/list"))
            .query(&params)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn create_dashboard(&self, req: CreateDashboardRequest) -> AppResult<ItemId> {
        let response = self
            .client
            .post(self.url("/api/dashboards/create"))
            .json(&req)
            .send()
            .await
            .map_err(Self::transport)?;
        let created: CreatedResponse = Self::decode(response).await?;
        Ok(created.id)
    }

    async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<ItemId> {
        let response = self
            .client
            .post(self.url("/api/dashboards/folders/create"))
            .json(&req)
            .send()
            .await
            .map_err(Self::transport)?;
        let created: CreatedResponse = Self::decode(response).await?;
        Ok(created.id)
    }

    async fn move_folder(&self, folder_id: &ItemId, new_parent_id: &ItemId) -> AppResult<()> {
        let response = self
            .client
            .put(self.url(&format!("/api/dashboards/folders/{folder_id}")))
            .json(&serde_json::json!({ "parentId": new_parent_id }))
            .send()
            .await
            .map_err(Self::transport)?;
        // The backend reports an illegal reparent as a generic bad request;
        // surface it under the move-specific kind.
        Self::check(response).await.map_err(|mut err| {
            if err.kind == dashhub_core::error::ErrorKind::Validation {
                err.kind = dashhub_core::error::ErrorKind::InvalidOperation;
            }
            err
        })
    }

    async fn delete_folder(&self, folder_id: &ItemId) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/dashboards/folders/{folder_id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response).await
    }

    async fn delete_dashboard(&self, id: &ItemId) -> AppResult<()> {
        // Dashboard deletion is a GET on this backend.
        let response = self
            .client
            .get(self.url(&format!("/api/dashboards/delete/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response).await
    }

    async fn toggle_favorite(&self, id: &ItemId) -> AppResult<bool> {
        let response = self
            .client
            .put(self.url(&format!("/api/dashboards/favorite/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        let favorite: FavoriteResponse = Self::decode(response).await?;
        Ok(favorite.is_favorite)
    }
}
