// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod preview;
pub mod render;
pub mod settings;
pub mod timeline;

// public uses
pub use app::{App, Mode, Options, OutputFormat};
pub use render::Renderer;
pub use settings::Settings;
pub use timeline::Timeline;

// re-exports
pub use tracematch;
