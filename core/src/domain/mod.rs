pub mod camera;
pub mod common;
pub mod meal_plan;
pub mod pantry;
pub mod preferences;
pub mod session;
pub mod storage;
