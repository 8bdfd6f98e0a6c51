use bevy::prelude::*;

use crate::{
    items::ItemOrder,
    list::{FloatingLabel, FloatingRow, ListRow, RowLabel, palette::RowPalette},
    reorder::{DragSession, ViewportGeometry},
};

/// System: show the current order. The lifted row keeps its slot in the
/// layout but is not drawn.
pub fn sync_rows(
    order: Res<ItemOrder>,
    session: Res<DragSession>,
    palette: Res<RowPalette>,
    mut rows: Query<(&ListRow, &mut BackgroundColor, &mut Visibility)>,
    mut labels: Query<(&RowLabel, &mut Text)>,
) {
    if !order.is_changed() && !session.is_changed() && !palette.is_changed() {
        return;
    }

    let lifted = session.dragged_index();

    for (row, mut background, mut visibility) in &mut rows {
        let Some(item) = order.get(row.position) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        background.set_if_neq(BackgroundColor(palette.color(item)));

        let wanted = if lifted == Some(row.position) {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        visibility.set_if_neq(wanted);
    }

    for (label, mut text) in &mut labels {
        let content = order
            .get(label.position)
            .map(|item| item.to_string())
            .unwrap_or_default();
        if text.0 != content {
            text.0 = content;
        }
    }
}

/// System: floating copy of the dragged item, following the pointer
pub fn sync_floating_row(
    order: Res<ItemOrder>,
    session: Res<DragSession>,
    geometry: Res<ViewportGeometry>,
    palette: Res<RowPalette>,
    mut floating: Query<(&mut Node, &mut BackgroundColor), With<FloatingRow>>,
    mut label: Query<&mut Text, With<FloatingLabel>>,
) {
    let Ok((mut node, mut background)) = floating.single_mut() else {
        return;
    };

    let dragged = session.dragged_index().and_then(|index| order.get(index));
    let (Some(top), Some(item)) = (session.floating_top(&geometry), dragged) else {
        if node.display != Display::None {
            node.display = Display::None;
        }
        return;
    };

    node.display = Display::Flex;
    node.top = Val::Px(top);
    background.set_if_neq(BackgroundColor(palette.color(item)));

    if let Ok(mut text) = label.single_mut() {
        let content = item.to_string();
        if text.0 != content {
            text.0 = content;
        }
    }
}
