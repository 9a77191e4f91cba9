pub mod core;
pub mod leads;
pub mod locale;
pub mod scene;
pub mod systems;
pub mod ui;
