use bevy::prelude::*;

use crate::{
    config::ReorderConfig,
    items::ItemOrder,
    list::{FloatingLabel, FloatingRow, ListRow, ListViewport, RowLabel, palette::RowPalette},
    reorder::DragHandle,
};

/// Fill the list with demo items and give each one a colour
pub fn setup_items(
    mut commands: Commands,
    config: Res<ReorderConfig>,
    mut order: ResMut<ItemOrder>,
) {
    *order = ItemOrder::sequence(config.item_count);
    let palette = RowPalette::random_for(order.as_slice(), &mut rand::rng());
    info!("Generated {} demo rows ({} colours)", order.len(), palette.len());
    commands.insert_resource(palette);
}

/// Spawn the scrollable viewport, one row per list position, and the
/// floating row (hidden until a drag starts)
pub fn spawn_list(mut commands: Commands, config: Res<ReorderConfig>, order: Res<ItemOrder>) {
    if order.is_empty() {
        warn!("Item list is empty; nothing to drag");
    }
    let row_count = order.len();
    let padding = config.row_padding;
    let handle_font_size = config.handle_font_size;
    let label_font_size = config.label_font_size;

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::WHITE),
            Name::new("List Root"),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    width: Val::Percent(100.0),
                    flex_grow: 1.0,
                    min_height: Val::Px(0.0),
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::scroll_y(),
                    ..default()
                },
                ScrollPosition::default(),
                ListViewport,
                Name::new("List Viewport"),
            ))
            .with_children(|viewport| {
                for position in 0..row_count {
                    viewport
                        .spawn((
                            row_node(padding),
                            BackgroundColor(Color::WHITE),
                            ListRow { position },
                        ))
                        .with_children(|row| {
                            row.spawn((
                                Text::new("@"),
                                TextFont::from_font_size(handle_font_size),
                                TextColor(Color::BLACK),
                                Interaction::default(),
                                DragHandle,
                            ));
                            row.spawn((
                                Text::new(""),
                                TextFont::from_font_size(label_font_size),
                                TextColor(Color::BLACK),
                                label_node(),
                                RowLabel { position },
                            ));
                        });
                }
            });

            root.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    display: Display::None,
                    ..row_node(padding)
                },
                BackgroundColor(Color::BLACK),
                GlobalZIndex(2),
                FloatingRow,
                Name::new("Floating Row"),
            ))
            .with_children(|row| {
                row.spawn((
                    Text::new("@"),
                    TextFont::from_font_size(handle_font_size),
                    TextColor(Color::BLACK),
                ));
                row.spawn((
                    Text::new(""),
                    TextFont::from_font_size(label_font_size),
                    TextColor(Color::BLACK),
                    label_node(),
                    FloatingLabel,
                ));
            });
        });

    info!("Spawned list with {} rows", row_count);
}

fn row_node(padding: f32) -> Node {
    Node {
        width: Val::Percent(100.0),
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        flex_shrink: 0.0,
        padding: UiRect::all(Val::Px(padding)),
        ..default()
    }
}

fn label_node() -> Node {
    Node {
        flex_grow: 1.0,
        margin: UiRect::left(Val::Px(24.0)),
        ..default()
    }
}
