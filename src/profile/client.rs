//! gRPC client for communicating with the Coral profile service
//!
//! Message types and the service stub are generated from
//! `proto/profile.proto` by the build script.

use super::error::MutationError;
use super::traits::ProfileClientTrait;
use crate::config::TuiConfig;
use crate::state::{parse_empty_as_null, Settings, UpdateBioInput, Viewer};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tonic::metadata::AsciiMetadataValue;
use tonic::transport::{Channel, Endpoint};

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("coral.profile.v1");
}

use proto::profile_service_client::ProfileServiceClient;

/// Client for communicating with the profile service
#[derive(Clone)]
pub struct ProfileClient {
    /// Generated stub over a lazily connected channel, cloned per call
    client: ProfileServiceClient<Channel>,
    /// Bearer token sent with every request
    access_token: Option<String>,
    /// The service address
    address: String,
}

impl ProfileClient {
    /// Create a new client. The connection is only made on first use.
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let address = config.resolved_service_address();
        let channel = Endpoint::from_shared(address.clone())
            .map_err(|e| anyhow!("Invalid profile service address {address}: {e}"))?
            .connect_lazy();

        Ok(Self {
            client: ProfileServiceClient::new(channel),
            access_token: config.resolved_access_token(),
            address,
        })
    }

    /// Address the client talks to
    pub fn address(&self) -> &str {
        &self.address
    }

    fn request<T>(&self, message: T) -> Result<tonic::Request<T>, tonic::Status> {
        let mut request = tonic::Request::new(message);
        if let Some(token) = &self.access_token {
            let value: AsciiMetadataValue = format!("Bearer {token}")
                .parse()
                .map_err(|_| tonic::Status::unauthenticated("Access token is not valid ASCII"))?;
            request.metadata_mut().insert("authorization", value);
        }
        Ok(request)
    }
}

#[async_trait]
impl ProfileClientTrait for ProfileClient {
    async fn fetch_viewer(&self) -> Result<Viewer> {
        let request = self
            .request(proto::GetViewerRequest {})
            .map_err(|e| anyhow!("Failed to load profile: {}", e.message()))?;
        let response = self
            .client
            .clone()
            .get_viewer(request)
            .await
            .map_err(|e| anyhow!("Failed to load profile: {}", e.message()))?;

        Ok(viewer_from_proto(response.into_inner()))
    }

    async fn fetch_settings(&self) -> Result<Settings> {
        let request = self
            .request(proto::GetSettingsRequest {})
            .map_err(|e| anyhow!("Failed to load settings: {}", e.message()))?;
        let response = self
            .client
            .clone()
            .get_settings(request)
            .await
            .map_err(|e| anyhow!("Failed to load settings: {}", e.message()))?;

        Ok(Settings {
            member_bios: response.into_inner().member_bios,
        })
    }

    async fn update_bio(&self, input: UpdateBioInput) -> Result<(), MutationError> {
        let request = self.request(proto::UpdateBioRequest { bio: input.bio })?;
        let response = self.client.clone().update_bio(request).await?;

        check_update_response(response.into_inner())
    }
}

fn viewer_from_proto(response: proto::GetViewerResponse) -> Viewer {
    Viewer {
        id: response.id,
        username: response.username,
        bio: response.bio.as_deref().and_then(parse_empty_as_null),
    }
}

fn check_update_response(response: proto::UpdateBioResponse) -> Result<(), MutationError> {
    if response.invalid_args.is_empty() {
        Ok(())
    } else {
        Err(MutationError::InvalidArgs(response.invalid_args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_viewer_from_proto_keeps_bio() {
        let viewer = viewer_from_proto(proto::GetViewerResponse {
            id: "user-0".to_string(),
            username: "Markus".to_string(),
            bio: Some("Hello".to_string()),
        });
        assert_eq!(viewer.bio.as_deref(), Some("Hello"));
        assert_eq!(viewer.username, "Markus");
    }

    #[test]
    fn test_viewer_from_proto_empty_bio_is_none() {
        let viewer = viewer_from_proto(proto::GetViewerResponse {
            id: "user-1".to_string(),
            username: "Lukas".to_string(),
            bio: Some(String::new()),
        });
        assert!(viewer.bio.is_none());
    }

    #[test]
    fn test_viewer_from_proto_whitespace_bio_is_none() {
        let viewer = viewer_from_proto(proto::GetViewerResponse {
            id: "user-1".to_string(),
            username: "Lukas".to_string(),
            bio: Some("  \n ".to_string()),
        });
        assert!(viewer.bio.is_none());
    }

    #[test]
    fn test_check_update_response_ok() {
        let response = proto::UpdateBioResponse {
            bio: Some("Hi".to_string()),
            invalid_args: HashMap::new(),
        };
        assert!(check_update_response(response).is_ok());
    }

    #[test]
    fn test_check_update_response_invalid_args() {
        let response = proto::UpdateBioResponse {
            bio: None,
            invalid_args: HashMap::from([("bio".to_string(), "too long".to_string())]),
        };
        assert_eq!(
            check_update_response(response),
            Err(MutationError::invalid_arg("bio", "too long"))
        );
    }

    #[tokio::test]
    async fn test_new_with_default_config() {
        let client = ProfileClient::new(&TuiConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_new_rejects_bad_address() {
        let config = TuiConfig {
            service_address: Some("not a uri".to_string()),
            ..Default::default()
        };
        assert!(ProfileClient::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_request_attaches_bearer_token() {
        let config = TuiConfig {
            access_token: Some("secret".to_string()),
            ..Default::default()
        };
        let client = ProfileClient::new(&config).unwrap();
        let request = client.request(proto::GetViewerRequest {}).unwrap();
        let value = request.metadata().get("authorization").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer secret");
    }
}
