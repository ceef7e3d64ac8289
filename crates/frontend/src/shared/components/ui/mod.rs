pub mod button;
pub mod checkbox;
pub mod field_error;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use checkbox::Checkbox;
pub use field_error::FieldError;
pub use input::Input;
pub use select::{plain_options, static_options, Select};
pub use textarea::Textarea;
