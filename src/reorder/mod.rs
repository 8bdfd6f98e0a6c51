//! Drag-to-reorder core: gesture tracking, index mapping and the per-frame
//! reorder loop. `movement`, `geometry`, `session` and `engine` are plain
//! functions and structs; `systems` and `plugin` wire them into the app.

pub mod engine;
pub mod geometry;
pub mod movement;
pub mod plugin;
pub mod session;
pub mod systems;

pub use engine::AutoScrollPolicy;
pub use geometry::ViewportGeometry;
pub use plugin::{ReorderPlugin, ReorderSystems};
pub use session::{DragPhase, DragSession};
pub use systems::{AutoScrollRequest, DragHandle};
