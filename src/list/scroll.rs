use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::{
    config::ReorderConfig,
    list::ListViewport,
    reorder::{AutoScrollRequest, DragSession, ViewportGeometry},
};

/// System: jump the viewport to the latest auto-scroll offset of this frame.
/// Layout clamps what is shown; `measure_viewport` reads that clamped value
/// back, so requests never build on an overshoot.
pub fn apply_auto_scroll(
    mut requests: MessageReader<AutoScrollRequest>,
    mut viewport: Query<&mut ScrollPosition, With<ListViewport>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };
    let Ok(mut scroll) = viewport.single_mut() else {
        return;
    };
    scroll.y = request.offset.max(0.0);
}

/// System: mouse-wheel scrolling while idle. A running drag refuses the
/// takeover, so wheel input is dropped until release.
///
/// Steps from the measured (layout-clamped) offset rather than the raw
/// `ScrollPosition`, so scrolling back up after overshooting the end
/// responds immediately.
pub fn wheel_scroll(
    mut wheel: MessageReader<MouseWheel>,
    session: Res<DragSession>,
    config: Res<ReorderConfig>,
    geometry: Res<ViewportGeometry>,
    mut viewport: Query<&mut ScrollPosition, With<ListViewport>>,
) {
    if !session.grant_termination() {
        wheel.clear();
        return;
    }

    let mut offset = None;
    for ev in wheel.read() {
        let dy = wheel_delta(ev.unit, ev.y, config.wheel_line_height);
        let base = offset.unwrap_or(geometry.scroll_offset);
        offset = Some((base - dy).max(0.0));
    }

    let Some(offset) = offset else {
        return;
    };
    if let Ok(mut scroll) = viewport.single_mut() {
        scroll.y = offset;
    }
}

/// Wheel movement in logical pixels (positive = towards the top of the list)
fn wheel_delta(unit: MouseScrollUnit, y: f32, line_height: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y * line_height,
        MouseScrollUnit::Pixel => y,
    }
}
