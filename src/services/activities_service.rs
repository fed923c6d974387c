use std::collections::BTreeMap;

use crate::models::Activity;
use crate::registry::SharedRegistry;

/// Snapshot of every activity, keyed by name. No filtering, no pagination.
pub async fn list_activities(registry: &SharedRegistry) -> BTreeMap<String, Activity> {
    registry.read().await.snapshot()
}
