//! In-memory service wiring for the API.
//!
//! The hub keeps the registry of sensor boxes and their latest readings in
//! process memory; nothing here is persisted across restarts.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;

/// A registered sensor box and its most recent reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorBox {
    /// Opaque box identifier (the original hub keys boxes by box address).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Sensor kind reported by the box (e.g. "temperature").
    pub sensor_type: String,
    /// Latest reading, if any has arrived.
    pub last_reading: Option<f64>,
}

/// Shared application services, owned by the router.
#[derive(Debug, Default)]
pub struct AppServices {
    boxes: RwLock<HashMap<String, SensorBox>>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a box. Returns `false` if the id is already taken.
    pub fn register_box(&self, new_box: SensorBox) -> bool {
        let mut boxes = self.boxes.write().unwrap();
        if boxes.contains_key(&new_box.id) {
            return false;
        }
        boxes.insert(new_box.id.clone(), new_box);
        true
    }

    /// Remove a box. Returns `false` if no such box exists.
    pub fn remove_box(&self, id: &str) -> bool {
        self.boxes.write().unwrap().remove(id).is_some()
    }

    /// Record a reading for a box. Returns `false` if no such box exists.
    pub fn record_reading(&self, id: &str, value: f64) -> bool {
        match self.boxes.write().unwrap().get_mut(id) {
            Some(sensor_box) => {
                sensor_box.last_reading = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn get_box(&self, id: &str) -> Option<SensorBox> {
        self.boxes.read().unwrap().get(id).cloned()
    }

    /// All registered boxes, sorted by id for stable listings.
    pub fn list_boxes(&self) -> Vec<SensorBox> {
        let mut all: Vec<SensorBox> = self.boxes.read().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_box(id: &str) -> SensorBox {
        SensorBox {
            id: id.to_string(),
            name: format!("box {id}"),
            sensor_type: "temperature".to_string(),
            last_reading: None,
        }
    }

    #[test]
    fn register_rejects_duplicate_ids() {
        let services = AppServices::new();
        assert!(services.register_box(temp_box("b-1")));
        assert!(!services.register_box(temp_box("b-1")));
    }

    #[test]
    fn record_reading_updates_the_latest_value() {
        let services = AppServices::new();
        services.register_box(temp_box("b-1"));
        assert!(services.record_reading("b-1", 21.5));
        assert_eq!(services.get_box("b-1").unwrap().last_reading, Some(21.5));
    }

    #[test]
    fn record_reading_for_unknown_box_fails() {
        let services = AppServices::new();
        assert!(!services.record_reading("missing", 1.0));
    }

    #[test]
    fn list_is_sorted_by_id() {
        let services = AppServices::new();
        services.register_box(temp_box("b-2"));
        services.register_box(temp_box("b-1"));
        let ids: Vec<_> = services.list_boxes().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["b-1", "b-2"]);
    }
}
