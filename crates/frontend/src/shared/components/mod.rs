pub mod action_buttons;
pub mod card;
pub mod drawer;
pub mod toast;
pub mod ui;
