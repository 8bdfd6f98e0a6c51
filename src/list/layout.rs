//! Feeds [`ViewportGeometry`] from the UI layout.
//!
//! `ComputedNode` sizes, scroll positions and `UiGlobalTransform` translations
//! are in physical pixels; everything stored in the geometry is logical, like
//! pointer input.

use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};

use crate::{
    list::{ListRow, ListViewport},
    reorder::ViewportGeometry,
};

/// System: viewport top, height and scroll offset.
///
/// The offset comes from `ComputedNode::scroll_position`, which layout has
/// already clamped to the content. `ScrollPosition` itself is never clamped
/// back and can run past the end.
pub fn measure_viewport(
    viewport: Query<(&ComputedNode, &UiGlobalTransform), With<ListViewport>>,
    mut geometry: ResMut<ViewportGeometry>,
) {
    let Ok((node, transform)) = viewport.single() else {
        return;
    };

    let scale = node.inverse_scale_factor();
    let size = node.size() * scale;
    // Node transforms are centred
    let top = transform.translation.y * scale - size.y * 0.5;

    let measured = ViewportGeometry {
        scroll_offset: node.scroll_position.y * scale,
        viewport_top: top,
        viewport_height: size.y,
        ..*geometry
    };
    geometry.set_if_neq(measured);
}

/// System: height of the most recently laid-out row
pub fn measure_rows(
    rows: Query<&ComputedNode, (With<ListRow>, Changed<ComputedNode>)>,
    mut geometry: ResMut<ViewportGeometry>,
) {
    let Some(height) = rows
        .iter()
        .map(|node| node.size().y * node.inverse_scale_factor())
        .filter(|height| *height > 0.0)
        .last()
    else {
        return;
    };

    if geometry.row_height != height {
        debug!("Row height measured: {}", height);
        geometry.row_height = height;
    }
}
