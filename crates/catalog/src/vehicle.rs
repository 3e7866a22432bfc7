use serde::{Deserialize, Serialize};

/// A vehicle in the demo garage.
///
/// Serialized with an internal `"type"` tag, so a car renders as
/// `{"type": "car", "description": ...}` and a plane additionally carries
/// its `size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Vehicle {
    Car { description: String },
    Plane { description: String, size: i64 },
}

impl Vehicle {
    pub fn description(&self) -> &str {
        match self {
            Vehicle::Car { description } | Vehicle::Plane { description, .. } => description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_serializes_with_type_tag() {
        let car = Vehicle::Car {
            description: "All my friends drive a low rider".to_string(),
        };
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["type"], "car");
        assert!(json.get("size").is_none());
    }

    #[test]
    fn plane_roundtrips_with_size() {
        let plane = Vehicle::Plane {
            description: "Music is my aeroplane, it's my aeroplane".to_string(),
            size: 5,
        };
        let json = serde_json::to_value(&plane).unwrap();
        assert_eq!(json["type"], "plane");
        assert_eq!(json["size"], 5);

        let back: Vehicle = serde_json::from_value(json).unwrap();
        assert_eq!(back, plane);
    }
}
