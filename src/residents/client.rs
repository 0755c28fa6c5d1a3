// src/residents/client.rs

use crate::residents::models::{ResidentId, ResidentsEnvelope, UpdateRequest};
use crate::residents::ApiError;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// The two backend calls the review page depends on.
pub trait ResidentsApi {
    /// `GET /admin/residents`, raw entries in backend order.
    fn list_residents(&self) -> Result<Vec<Value>, ApiError>;

    /// `POST /admin/residency-status/{id}`.
    fn update_residency_status(
        &self,
        id: &ResidentId,
        req: &UpdateRequest,
    ) -> Result<(), ApiError>;
}

pub struct HttpResidentsApi {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

impl HttpResidentsApi {
    pub fn new(base_url: Url, token: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url,
            token,
            client,
        })
    }

    pub fn residents_url(&self) -> Result<Url, ApiError> {
        self.base_url
            .join("admin/residents")
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    pub fn status_url(&self, id: &ResidentId) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join("admin/residency-status/")
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());

        Ok(url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn check_status(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl ResidentsApi for HttpResidentsApi {
    fn list_residents(&self) -> Result<Vec<Value>, ApiError> {
        let url = self.residents_url()?;

        let resp = self
            .authorize(self.client.get(url))
            .header("Accept", "application/json")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let envelope: ResidentsEnvelope = Self::check_status(resp)?
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(envelope.residents)
    }

    fn update_residency_status(
        &self,
        id: &ResidentId,
        req: &UpdateRequest,
    ) -> Result<(), ApiError> {
        let url = self.status_url(id)?;

        let resp = self
            .authorize(self.client.post(url))
            .json(req)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check_status(resp)?;
        Ok(())
    }
}
