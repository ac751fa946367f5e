//! Rendering systems for the planetary simulator.
//!
//! Everything here is a read-only consumer of the physics core: body
//! state is queried strictly between steps and projected to screen space.

mod bodies;
mod labels;
mod trails;

use bevy::prelude::*;

use self::bodies::BodiesPlugin;
use self::labels::LabelPlugin;
use self::trails::TrailPlugin;

pub use self::bodies::{BodyStyleSettings, BodyVisual};
pub use self::labels::LabelSettings;
pub use self::trails::TrailSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, TrailPlugin, LabelPlugin));
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Orbit trail polylines.
    pub const TRAIL: f32 = 1.0;
    /// The bodies themselves.
    pub const BODY: f32 = 2.0;
}
