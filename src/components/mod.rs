mod button;
mod checkbox;
mod field;
mod notice;
mod select;
mod text_input;

pub use button::{Button, ClickHandler};
pub use checkbox::{Checkbox, CheckboxChangeHandler};
pub use notice::{Notice, NoticeKind};
pub use select::{Select, ToggleHandler};
pub use text_input::{BlurHandler, TextChangeHandler, TextInput};

#[cfg(test)]
mod test_component_smoke;
