pub mod error;
pub mod fit;
pub mod poll;
pub mod size;

pub use error::StageError;
pub use fit::compute_fit;
pub use poll::{PollConfig, ViewportProbe, poll_viewport};
pub use size::{FitResult, LogicalSize, ViewportSize};
