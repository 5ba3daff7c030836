pub mod analysis_editor;
pub mod analysis_table;
pub mod check_editor;
pub mod checks_table;
pub mod code_dialog;
pub mod index_page;
