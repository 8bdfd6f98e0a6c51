use bevy::prelude::*;

use crate::{
    config::ReorderConfig,
    input::{PointerEvent, PointerEventType},
    items::ItemOrder,
    reorder::{DragPhase, DragSession, ViewportGeometry, engine::recompute_frame},
};

/// Marker for the grab area of a row. A pointer-down only starts a drag when
/// one of these is pressed.
#[derive(Component, Debug, Default)]
pub struct DragHandle;

/// Request to jump the list viewport to an absolute scroll offset
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct AutoScrollRequest {
    pub offset: f32,
}

/// Run condition: keeps the per-frame recompute scheduled while dragging
pub fn drag_active(session: Res<DragSession>) -> bool {
    session.phase() == DragPhase::Dragging
}

/// System: Gesture tracker. Turns pointer events into drag session updates.
pub fn track_drag_gesture(
    mut pointer_events: MessageReader<PointerEvent>,
    handles: Query<&Interaction, With<DragHandle>>,
    geometry: Res<ViewportGeometry>,
    order: Res<ItemOrder>,
    mut session: ResMut<DragSession>,
) {
    for event in pointer_events.read() {
        let y = event.position.y;

        match event.event_type {
            PointerEventType::Down => {
                // Single drag at a time; a second finger is ignored
                if session.is_active() {
                    continue;
                }

                // Any pressed handle qualifies; the dragged row comes from
                // `y`, not from which handle was hit
                let on_handle = handles
                    .iter()
                    .any(|interaction| *interaction == Interaction::Pressed);
                if !on_handle || !geometry.contains_y(y) {
                    continue;
                }

                match session.begin(event.id, y, &geometry, order.len()) {
                    Some(index) => info!("Drag started on row {} (pointer {})", index, event.id),
                    None => warn!("Drag started before any row was measured"),
                }
            }

            PointerEventType::Move => {
                if session.owns(event.id) {
                    session.update(event.id, y);
                }
            }

            PointerEventType::Up | PointerEventType::Cancel => {
                if session.owns(event.id) {
                    info!(
                        "Drag released on row {:?} ({:?})",
                        session.dragged_index(),
                        event.event_type
                    );
                    session.end();
                }
            }
        }
    }
}

/// System: Reorder engine frame. Only scheduled while a drag is active.
pub fn recompute_drag_frame(
    mut session: ResMut<DragSession>,
    geometry: Res<ViewportGeometry>,
    config: Res<ReorderConfig>,
    mut order: ResMut<ItemOrder>,
    mut scroll_requests: MessageWriter<AutoScrollRequest>,
) {
    let outcome = recompute_frame(
        session.bypass_change_detection(),
        &geometry,
        order.bypass_change_detection().as_mut_slice(),
        &config.auto_scroll(),
    );

    if let Some(offset) = outcome.scroll_to {
        scroll_requests.write(AutoScrollRequest { offset });
    }

    if outcome.relocation.is_some() {
        order.set_changed();
    }

    if outcome.index_changed {
        session.set_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemId;
    use bevy::ecs::message::Messages;

    const ROW: f32 = 40.0;

    fn test_app(item_count: usize) -> App {
        let mut app = App::new();
        app.add_message::<PointerEvent>()
            .add_message::<AutoScrollRequest>()
            .insert_resource(ReorderConfig::default())
            .insert_resource(ItemOrder::sequence(item_count))
            .insert_resource(ViewportGeometry {
                scroll_offset: 0.0,
                viewport_top: 0.0,
                viewport_height: 800.0,
                row_height: ROW,
            })
            .init_resource::<DragSession>()
            .add_systems(
                Update,
                (
                    track_drag_gesture,
                    recompute_drag_frame.run_if(drag_active),
                )
                    .chain(),
            );
        app
    }

    fn press_handle(app: &mut App) {
        app.world_mut().spawn((DragHandle, Interaction::Pressed));
    }

    fn pointer(app: &mut App, event_type: PointerEventType, y: f32) {
        app.world_mut().write_message(PointerEvent {
            position: Vec2::new(10.0, y),
            event_type,
            id: 0,
        });
    }

    fn row_y(index: usize) -> f32 {
        index as f32 * ROW + ROW * 0.5
    }

    fn order(app: &App) -> Vec<usize> {
        app.world()
            .resource::<ItemOrder>()
            .as_slice()
            .iter()
            .map(|id| id.0)
            .collect()
    }

    #[test]
    fn test_drag_reorders_list() {
        let mut app = test_app(5);
        press_handle(&mut app);

        pointer(&mut app, PointerEventType::Down, row_y(2));
        app.update();
        assert_eq!(app.world().resource::<DragSession>().dragged_index(), Some(2));

        pointer(&mut app, PointerEventType::Move, row_y(4));
        app.update();

        assert_eq!(order(&app), vec![0, 1, 3, 4, 2]);
        assert_eq!(app.world().resource::<DragSession>().dragged_index(), Some(4));
    }

    #[test]
    fn test_down_off_handle_is_ignored() {
        let mut app = test_app(5);

        pointer(&mut app, PointerEventType::Down, row_y(2));
        app.update();

        assert!(!app.world().resource::<DragSession>().is_active());
    }

    #[test]
    fn test_stale_moves_after_release() {
        let mut app = test_app(5);
        press_handle(&mut app);

        pointer(&mut app, PointerEventType::Down, row_y(1));
        app.update();
        pointer(&mut app, PointerEventType::Up, row_y(1));
        app.update();
        assert!(!app.world().resource::<DragSession>().is_active());

        pointer(&mut app, PointerEventType::Move, row_y(4));
        app.update();
        assert_eq!(order(&app), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_cancel_ends_drag() {
        let mut app = test_app(5);
        press_handle(&mut app);

        pointer(&mut app, PointerEventType::Down, row_y(0));
        app.update();
        pointer(&mut app, PointerEventType::Cancel, row_y(0));
        app.update();

        let session = app.world().resource::<DragSession>();
        assert!(!session.is_active());
        assert_eq!(session.dragged_index(), None);
    }

    #[test]
    fn test_bottom_edge_writes_scroll_request() {
        let mut app = test_app(50);
        press_handle(&mut app);

        pointer(&mut app, PointerEventType::Down, 750.0);
        app.update();

        let requests: Vec<AutoScrollRequest> = app
            .world_mut()
            .resource_mut::<Messages<AutoScrollRequest>>()
            .drain()
            .collect();
        assert_eq!(requests, vec![AutoScrollRequest { offset: 20.0 }]);
        // (0 + 750) / 40 = 18
        assert_eq!(app.world().resource::<DragSession>().dragged_index(), Some(18));
        assert_eq!(app.world().resource::<ItemOrder>().get(18), Some(ItemId(18)));
    }
}
