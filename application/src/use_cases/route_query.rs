//! Route query use case
//!
//! Classifies a free-text query, resolves the tool group that serves the
//! chosen domain and hands the query to it. Groups are loaded on first use
//! and memoized; failed loads are not cached, so the next query retries.
//!
//! The cache lock is never held across the load `.await`. Two concurrent
//! misses for the same group may both load it; the second insert simply
//! replaces the first.

use crate::ports::group_loader::{GroupLoader, LoadError};
use crate::ports::tool_group::{GroupCapability, ToolGroup};
use catc_domain::{
    Classification, DefaultToolValidator, Domain, DomainClassifier, GroupMap, ToolCall,
    ToolDefinition, ToolError, ToolResult, ToolValidator,
};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Answer to a routed query together with how it was routed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOutcome {
    pub domain: Domain,
    pub group: String,
    pub answer: String,
}

/// Tools of one group, as listed to callers
#[derive(Debug, Clone)]
pub struct GroupTools {
    pub group: String,
    pub tools: Vec<ToolDefinition>,
}

pub struct RouteQueryUseCase {
    classifier: DomainClassifier,
    group_map: GroupMap,
    loader: Arc<dyn GroupLoader>,
    cache: RwLock<HashMap<String, Arc<dyn ToolGroup>>>,
}

impl RouteQueryUseCase {
    pub fn new(loader: Arc<dyn GroupLoader>) -> Self {
        Self {
            classifier: DomainClassifier::builtin(),
            group_map: GroupMap::builtin(),
            loader,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_classifier(mut self, classifier: DomainClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_group_map(mut self, group_map: GroupMap) -> Self {
        self.group_map = group_map;
        self
    }

    pub fn classifier(&self) -> &DomainClassifier {
        &self.classifier
    }

    pub fn group_map(&self) -> &GroupMap {
        &self.group_map
    }

    pub fn classify(&self, query: &str) -> Classification {
        self.classifier.classify_detailed(query)
    }

    /// Names of the groups currently held in the cache, sorted
    pub fn cached_groups(&self) -> Vec<String> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = cache.keys().cloned().collect();
        names.sort();
        names
    }

    /// Cache hit, or load and memoize on success.
    pub async fn resolve(&self, group: &str) -> Result<Arc<dyn ToolGroup>, LoadError> {
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(handle) = cache.get(group) {
                return Ok(Arc::clone(handle));
            }
        }

        let handle = self.loader.load(group).await?;
        info!(group, "Loaded tool group");

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.insert(group.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Route a query and return the group's answer verbatim.
    pub async fn route(&self, query: &str) -> String {
        self.route_with_domain(query).await.answer
    }

    pub async fn route_with_domain(&self, query: &str) -> RouteOutcome {
        let classification = self.classifier.classify_detailed(query);
        let domain = classification.domain;
        let group = self.group_map.group_for(domain).to_string();
        debug!(
            %domain,
            group = %group,
            reason = ?classification.reason,
            "Classified query"
        );

        let answer = match self.resolve(&group).await {
            Ok(handle) => match handle.capability() {
                GroupCapability::RichText => handle.run_tools(query).await,
                GroupCapability::Basic => handle.process_request(query).await,
            },
            Err(e) => {
                warn!(%domain, group = %group, error = %e, "Could not load tool group");
                format!("Error: Could not load the {} agent.", domain)
            }
        };

        RouteOutcome {
            domain,
            group,
            answer,
        }
    }

    /// First group, in loader order, whose catalogue has `tool_name`.
    pub async fn find_tool(&self, tool_name: &str) -> Option<Arc<dyn ToolGroup>> {
        for group in self.loader.group_names() {
            match self.resolve(&group).await {
                Ok(handle) if handle.catalog().contains(tool_name) => return Some(handle),
                Ok(_) => {}
                Err(e) => warn!(group = %group, error = %e, "Skipping tool group"),
            }
        }
        None
    }

    /// Invoke a tool by name, wherever it lives.
    pub async fn invoke(&self, call: &ToolCall) -> ToolResult {
        let Some(handle) = self.find_tool(&call.tool_name).await else {
            return ToolResult::failure(&call.tool_name, ToolError::unknown_tool(&call.tool_name));
        };

        if let Some(definition) = handle.catalog().get(&call.tool_name)
            && let Err(message) = DefaultToolValidator.validate(call, definition)
        {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(message));
        }

        let started = Instant::now();
        let result = handle.execute(call).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(
            tool = %call.tool_name,
            group = handle.id(),
            success = result.is_success(),
            elapsed_ms,
            "Tool executed"
        );
        result.with_duration(elapsed_ms)
    }

    /// Tools of one group, or of every group the loader knows.
    ///
    /// Listing every group skips the ones that fail to load.
    pub async fn list_tools(&self, group: Option<&str>) -> Result<Vec<GroupTools>, LoadError> {
        if let Some(group) = group {
            let handle = self.resolve(group).await?;
            return Ok(vec![group_tools(handle.as_ref())]);
        }

        let names = self.loader.group_names();
        let loaded = join_all(names.iter().map(|name| self.resolve(name))).await;
        Ok(loaded
            .into_iter()
            .zip(names.iter())
            .filter_map(|(result, name)| match result {
                Ok(handle) => Some(group_tools(handle.as_ref())),
                Err(e) => {
                    warn!(group = %name, error = %e, "Skipping tool group");
                    None
                }
            })
            .collect())
    }
}

fn group_tools(handle: &dyn ToolGroup) -> GroupTools {
    GroupTools {
        group: handle.id().to_string(),
        tools: handle.catalog().all().cloned().collect(),
    }
}
