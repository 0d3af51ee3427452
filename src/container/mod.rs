pub mod descriptor;
pub mod image;
pub mod probe;
pub mod process;

pub use image::ensure_image;
pub use probe::{runtime_available, RUNTIME_PROGRAM};
pub use process::{stream_process, LAUNCH_FAILURE_CODE};
