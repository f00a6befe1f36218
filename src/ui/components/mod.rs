pub mod category_card;
pub mod confirm_dialog;
pub mod edit_popup;
pub mod print_preview;
pub mod summary_panel;
