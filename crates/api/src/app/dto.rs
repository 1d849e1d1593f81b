//! Request/response DTOs and JSON mapping helpers.

use serde::Deserialize;
use serde_json::{Value, json};

use super::services::SensorBox;

#[derive(Debug, Deserialize)]
pub struct RegisterBoxRequest {
    pub id: String,
    pub name: String,
    pub sensor_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    pub value: f64,
}

pub fn box_to_json(sensor_box: &SensorBox) -> Value {
    json!({
        "id": sensor_box.id,
        "name": sensor_box.name,
        "sensor_type": sensor_box.sensor_type,
        "last_reading": sensor_box.last_reading,
    })
}
