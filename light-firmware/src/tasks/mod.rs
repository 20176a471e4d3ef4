// Task-Modul: Enthält alle Embassy Tasks
//
// Tasten-Tasks schicken Eingaben über einen Channel an den Lichtseiten-Task.

pub mod buttons;
pub mod light_page;

// Re-export Tasks für einfachen Import
pub use buttons::{ButtonKind, button_task};
pub use light_page::light_page_task;
