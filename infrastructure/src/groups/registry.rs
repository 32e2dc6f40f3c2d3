//! Group registry
//!
//! Maps group names to factories. Factories run on every load; memoization
//! is the router's job.

use super::api_group::{ApiToolGroup, QueryForward};
use super::authentication::AuthenticationGroup;
use super::catalog::{appliance, connectivity, devices, ecosystem, events, sda, system};
use super::task::TaskToolGroup;
use async_trait::async_trait;
use catc_application::{
    ConnectorPort, GroupLoader, LoadError, SessionHandle, TaskMonitor, ToolGroup,
};
use catc_domain::routing::groups;
use std::sync::Arc;
use tracing::{debug, warn};

type GroupFactory = Box<dyn Fn() -> Result<Arc<dyn ToolGroup>, String> + Send + Sync>;

#[derive(Default)]
pub struct GroupRegistry {
    factories: Vec<(String, GroupFactory)>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; a second registration under the same name
    /// replaces the first.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn ToolGroup>, String> + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: GroupFactory = Box::new(factory);
        match self.factories.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = factory,
            None => self.factories.push((name, factory)),
        }
        self
    }

    /// Every group the gateway ships, sharing one session and task monitor.
    pub fn builtin(
        session: SessionHandle,
        connector: Arc<dyn ConnectorPort>,
        monitor: Arc<TaskMonitor>,
    ) -> Self {
        let api = |name: &'static str, endpoints: fn() -> Vec<crate::groups::endpoint::Endpoint>| {
            let session = session.clone();
            let monitor = monitor.clone();
            move || -> Result<Arc<dyn ToolGroup>, String> {
                Ok(Arc::new(ApiToolGroup::new(
                    name,
                    endpoints(),
                    session.clone(),
                    monitor.clone(),
                )))
            }
        };

        let auth = {
            let session = session.clone();
            let monitor = monitor.clone();
            move || -> Result<Arc<dyn ToolGroup>, String> {
                Ok(Arc::new(AuthenticationGroup::new(
                    session.clone(),
                    connector.clone(),
                    monitor.clone(),
                )))
            }
        };

        let connectivity_group = {
            let session = session.clone();
            let monitor = monitor.clone();
            move || -> Result<Arc<dyn ToolGroup>, String> {
                let sda_group: Arc<dyn ToolGroup> = Arc::new(ApiToolGroup::new(
                    groups::SDA,
                    sda::endpoints(),
                    session.clone(),
                    monitor.clone(),
                ));
                let group = ApiToolGroup::new(
                    groups::CONNECTIVITY,
                    connectivity::endpoints(),
                    session.clone(),
                    monitor.clone(),
                )
                .with_forward(QueryForward::new(connectivity::SDA_FORWARD_KEYWORDS, sda_group));
                Ok(Arc::new(group))
            }
        };

        let task = {
            let session = session.clone();
            let monitor = monitor.clone();
            move || -> Result<Arc<dyn ToolGroup>, String> {
                Ok(Arc::new(TaskToolGroup::new(session.clone(), monitor.clone())))
            }
        };

        Self::new()
            .register(groups::AUTHENTICATION, auth)
            .register(groups::DEVICES, api(groups::DEVICES, devices::endpoints))
            .register(groups::SDA, api(groups::SDA, sda::endpoints))
            .register(groups::CONNECTIVITY, connectivity_group)
            .register(groups::EVENTS, api(groups::EVENTS, events::endpoints))
            .register(groups::SYSTEM, api(groups::SYSTEM, system::endpoints))
            .register(groups::APPLIANCE, api(groups::APPLIANCE, appliance::endpoints))
            .register(groups::ECOSYSTEM, api(groups::ECOSYSTEM, ecosystem::endpoints))
            .register(groups::TASK, task)
    }
}

#[async_trait]
impl GroupLoader for GroupRegistry {
    fn group_names(&self) -> Vec<String> {
        self.factories.iter().map(|(name, _)| name.clone()).collect()
    }

    async fn load(&self, group: &str) -> Result<Arc<dyn ToolGroup>, LoadError> {
        let Some((_, factory)) = self.factories.iter().find(|(name, _)| name == group) else {
            return Err(LoadError::UnknownGroup(group.to_string()));
        };

        match factory() {
            Ok(handle) => {
                debug!(group, tools = handle.catalog().len(), "Built tool group");
                Ok(handle)
            }
            Err(reason) => {
                warn!(group, %reason, "Tool group failed to initialize");
                Err(LoadError::InitFailed {
                    group: group.to_string(),
                    reason,
                })
            }
        }
    }
}
