use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

/// Registry handle shared across request handlers. Mutations take the write
/// lock, so duplicate/capacity checks and the roster update are atomic.
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;

/// In-memory mapping from activity name to activity record. Built once at
/// process start, mutated in place by signup/unregister, lost on restart.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed seed set loaded at startup.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.insert(
            "Chess Club",
            seed_activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        );
        registry.insert(
            "Programming Class",
            seed_activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        );
        registry.insert(
            "Gym Class",
            seed_activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        );
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    /// Full name → activity mapping as the listing surface returns it.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.clone()
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }
}

fn seed_activity(
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}
