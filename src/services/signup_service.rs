use thiserror::Error;

use crate::registry::SharedRegistry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{activity} is full")]
    ActivityFull { activity: String },
    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

/// Add `email` to the activity's roster.
///
/// Lookup, duplicate check, capacity check, and the roster update all happen
/// under a single write-lock acquisition, so two concurrent signups cannot
/// both pass the checks before either write lands.
pub async fn signup(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut registry = registry.write().await;
    let activity = registry
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if activity.has_participant(email) {
        return Err(SignupError::AlreadySignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        });
    }
    if activity.is_full() {
        return Err(SignupError::ActivityFull {
            activity: activity_name.to_string(),
        });
    }

    activity.participants.push(email.to_string());
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove `email` from the activity's roster.
pub async fn unregister(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut registry = registry.write().await;
    let activity = registry
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(SignupError::NotRegistered {
            activity: activity_name.to_string(),
            email: email.to_string(),
        });
    };

    activity.participants.remove(pos);
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
