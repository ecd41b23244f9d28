pub mod config;
pub mod flows;
pub mod i18n;
pub mod navigation;
pub mod scheduler;
pub mod theme;
