pub mod canvas;
pub mod palette;
pub mod snapshot;
pub mod stars;
pub mod viewport;

pub use canvas::Canvas;
pub use snapshot::Scene;
pub use stars::StarField;
pub use viewport::Viewport;
