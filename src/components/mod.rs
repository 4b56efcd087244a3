//! UI Components
//!
//! Pieces attached to the server-rendered pages. Each `attach` returns `None`
//! when its elements are not on the current page.

mod char_counter;
mod checklist;
mod chips;
mod image_preview;
mod modal;
pub mod nav;
mod notice;
mod password_meter;
mod save_button;
pub mod scroll_top;
mod share_panel;
mod star_rating;
mod timer_panel;
mod toast;

pub use char_counter::{auto_resize, CharCounter};
pub use checklist::mount_checklist;
pub use chips::ChipGroup;
pub use image_preview::{ImagePreview, NEW_PROFILE_LAYOUT, PROFILE_LAYOUT, RECIPE_LAYOUT};
pub use modal::MessageModal;
pub use notice::{Feedback, Notice, NoticeKind};
pub use password_meter::{MatchIndicator, RequirementList, StrengthMeter};
pub use save_button::{SaveButton, ToggleSaveButton};
pub use share_panel::SharePanel;
pub use star_rating::{paint_static_ratings, StarPicker};
pub use timer_panel::TimerPanel;
pub use toast::Notifier;
