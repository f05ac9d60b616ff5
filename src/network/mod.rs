pub mod speed;
pub mod status;
pub mod system;
