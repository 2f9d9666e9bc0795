mod button;
mod checkbox;
mod date_input;
mod input;
mod radio;
mod select;
mod switch_field;
mod textarea;

pub use button::{Button, SubmitButton};
pub use checkbox::CheckboxInput;
pub use date_input::DateInput;
pub use input::Input;
pub use radio::RadioGroupInput;
pub use select::SelectInput;
pub use switch_field::SwitchInput;
pub use textarea::Textarea;
