/// Chrome extension: background icon tracking and content-script toasts
pub mod background;
pub mod toast;
pub mod tracker;
