use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HitResponse {
    #[serde(default)]
    pub value: Option<i64>,
}

impl HitResponse {
    // null = counter has never been hit; negatives clamp to zero
    pub fn normalized(&self) -> usize {
        match self.value {
            Some(value) if value > 0 => value as usize,
            _ => 0,
        }
    }
}
