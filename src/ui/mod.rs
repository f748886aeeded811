/// Web app views
pub mod app;
pub mod bookmark_card;
pub mod bookmark_list;
pub mod components;
pub mod dom;
pub mod header;
pub mod modals;
pub mod search_bar;
