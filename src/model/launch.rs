use super::types::PatchSize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    pub launch_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<Mission>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket: Option<Rocket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_patch_small: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_patch_large: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rocket_type: Option<String>,
}

impl Mission {
    pub fn patch(&self, size: PatchSize) -> Option<&str> {
        match size {
            PatchSize::Small => self.mission_patch_small.as_deref(),
            PatchSize::Large => self.mission_patch_large.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission() -> Mission {
        Mission {
            name: Some("FalconSat".to_string()),
            mission_patch_small: Some("small.png".to_string()),
            mission_patch_large: Some("large.png".to_string()),
        }
    }

    #[test]
    fn test_patch_by_size() {
        let m = mission();
        assert_eq!(m.patch(PatchSize::Small), Some("small.png"));
        assert_eq!(m.patch(PatchSize::Large), Some("large.png"));
        assert_eq!(m.patch(PatchSize::default()), Some("large.png"));
    }

    #[test]
    fn test_rocket_type_serializes_as_type() {
        let rocket = Rocket {
            id: "falcon9".to_string(),
            name: Some("Falcon 9".to_string()),
            rocket_type: Some("FT".to_string()),
        };
        let json = serde_json::to_value(&rocket).unwrap();
        assert_eq!(json["type"], "FT");
        assert!(json.get("rocket_type").is_none());
    }
}
