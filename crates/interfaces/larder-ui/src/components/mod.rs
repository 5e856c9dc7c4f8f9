pub mod forms;
pub mod ingredient_dialog;
