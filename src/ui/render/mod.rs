mod body;
mod dashboard;
mod flow;
mod frame;
mod gate;
mod lifecycle;
mod progress;
mod theme;
mod timing;

pub use dashboard::{Ui, UiActions, window_title};
pub use lifecycle::setup_render_ui;
