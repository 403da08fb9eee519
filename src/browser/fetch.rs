//! Fetch Client
//!
//! `FavoritesApi` over `gloo_net::http`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::api::{check_response, FavoritesApi};
use crate::config::FavoritesConfig;
use crate::error::{FavoritesError, FavoritesResult};
use crate::models::{EmptyBody, FavoriteForm, FavoritesCount, ToggleResponse};

fn network_error(err: gloo_net::Error) -> FavoritesError {
    FavoritesError::Network(err.to_string())
}

pub struct HttpFavoritesApi {
    config: FavoritesConfig,
}

impl HttpFavoritesApi {
    pub fn new(config: FavoritesConfig) -> Self {
        Self { config }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> FavoritesResult<T> {
        check_response(&self.config, response.status(), response.redirected(), &response.url())?;
        response
            .json::<T>()
            .await
            .map_err(|e| FavoritesError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl FavoritesApi for HttpFavoritesApi {
    async fn favorites_count(&self) -> FavoritesResult<FavoritesCount> {
        let response = Request::get(&self.config.count_url)
            .send()
            .await
            .map_err(network_error)?;
        self.decode(response).await
    }

    async fn toggle_favorite(&self, form: &FavoriteForm) -> FavoritesResult<ToggleResponse> {
        let url = self.config.toggle_url(&form.product_slug);
        let response = Request::post(&url)
            .header(&self.config.csrf_header, &form.csrf_token)
            .json(&EmptyBody {})
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        self.decode(response).await
    }
}
