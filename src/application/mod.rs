pub mod hydration;
pub mod render;
pub mod submission;
pub mod ui_state;
pub mod view;

pub use hydration::*;
pub use submission::*;
pub use ui_state::*;
pub use view::*;
