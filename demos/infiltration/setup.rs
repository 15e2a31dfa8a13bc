use serde::Deserialize;
use soakage::prelude::{Config, PitGeometry, ReadingSeries, VoidRatio};

// Test description, loaded from JSON
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Setup {
    #[serde(default)]
    pub geometry: PitGeometry,
    #[serde(default)]
    pub void_ratio: VoidRatio,
    #[serde(default)]
    pub readings: ReadingSeries,
    #[serde(default)]
    pub config: Config,
}
