mod back_button;
mod mode_selector;

pub use back_button::BackButton;
pub use mode_selector::ModeSelector;
