//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, icons and badges.

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod dropdown;
pub mod icon;
pub mod select;
pub mod skeleton;
pub mod spinner;
pub mod text_input;
pub mod textarea;
pub mod toggle;

pub use badge::Badge;
pub use button::{Button, ButtonKind, ButtonSize, ButtonVariant};
pub use checkbox::Checkbox;
pub use dropdown::{Dropdown, DropdownAlign, DropdownItem};
pub use icon::{Icon, IconName, IconSize};
pub use select::{Select, SelectOption};
pub use skeleton::{Skeleton, SkeletonShape, SkeletonWidth};
pub use spinner::Spinner;
pub use text_input::{InputKind, TextInput};
pub use textarea::Textarea;
pub use toggle::Toggle;
