use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Booked launch IDs in booking order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trips: Vec<String>,

    #[serde(default)]
    pub created: DateTime<Utc>,
}

impl User {
    pub fn new(id: u64, email: String) -> Self {
        Self {
            id,
            email,
            token: None,
            trips: Vec::new(),
            created: Utc::now(),
        }
    }

    pub fn is_booked_on(&self, launch_id: &str) -> bool {
        self.trips.iter().any(|t| t == launch_id)
    }

    /// Book a launch. Booking twice is a no-op.
    pub fn book(&mut self, launch_id: &str) {
        if !self.is_booked_on(launch_id) {
            self.trips.push(launch_id.to_string());
        }
    }

    /// Returns false when the launch was not booked.
    pub fn cancel(&mut self, launch_id: &str) -> bool {
        let before = self.trips.len();
        self.trips.retain(|t| t != launch_id);
        self.trips.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_is_idempotent() {
        let mut user = User::new(1, "a@b.co".to_string());
        user.book("3");
        user.book("3");
        user.book("1");
        assert_eq!(user.trips, vec!["3", "1"]);
        assert!(user.is_booked_on("1"));
    }

    #[test]
    fn test_cancel() {
        let mut user = User::new(1, "a@b.co".to_string());
        user.book("3");
        assert!(user.cancel("3"));
        assert!(!user.cancel("3"));
        assert!(!user.is_booked_on("3"));
    }
}
