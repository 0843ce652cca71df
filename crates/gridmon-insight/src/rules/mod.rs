pub mod angle;
pub mod oil_level;

pub use angle::AngleRangeRule;
pub use oil_level::OilLevelRule;
