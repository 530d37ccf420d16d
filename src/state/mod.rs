pub mod gesture;
pub mod sidebar;
pub mod transform;
