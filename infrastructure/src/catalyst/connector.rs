//! Connector building authenticated [`CatalystClient`]s

use super::client::{CatalystClient, ClientOptions};
use async_trait::async_trait;
use catc_application::{ConnectorPort, TransportError, TransportPort};
use catc_domain::Credentials;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CatalystConnector {
    options: ClientOptions,
}

impl CatalystConnector {
    pub fn new(options: ClientOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ConnectorPort for CatalystConnector {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<dyn TransportPort>, TransportError> {
        let client = CatalystClient::new(credentials.clone(), self.options)?;
        client.authenticate().await?;
        Ok(Arc::new(client))
    }
}
