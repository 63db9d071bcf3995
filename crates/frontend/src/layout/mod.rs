pub mod loading;
pub mod sidebar;
