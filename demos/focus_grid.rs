//! Scripted walkthrough of grid focus navigation.
//!
//! Builds a small release table, feeds it a sequence of arrow-key events,
//! and prints the semantic outline after each step. The `*` marks the one
//! target that is sequentially reachable at that moment.
//!
//! Run with: cargo run --example focus_grid

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rove::prelude::*;

fn build_grid() -> Node {
    FocusGrid::new("Releases")
        .row_count(3)
        .column_count(2)
        .child(
            GridRow::new(0)
                .child(
                    ColumnHeader::new(0)
                        .sort(SortDirection::Ascending)
                        .child(Button::new("Name")),
                )
                .child(ColumnHeader::new(1).child(Button::new("Date"))),
        )
        .child(
            GridRow::new(1)
                .child(
                    GridCell::new(0)
                        .child(Link::new("rove 0.1.0"))
                        .child(Button::new("Copy")),
                )
                .child(GridCell::new(1).child(Link::new("2024-06-01"))),
        )
        .child(
            GridRow::new(2)
                .child(
                    GridCell::new(0)
                        .child(Link::new("rove 0.2.0"))
                        .child(Button::new("Copy")),
                )
                .child(GridCell::new(1).child(Link::new("2024-07-15"))),
        )
        .into()
}

fn main() {
    on_focus_change(|change| {
        println!("(focus effect: {:?} -> {:?})", change.previous, change.focused);
    });

    let mut grid = build_grid();
    println!("initial tree:\n{}", outline(&grid));

    let script = [
        ("Right", KeyCode::Right),
        ("Right", KeyCode::Right),
        ("Down", KeyCode::Down),
        ("Down", KeyCode::Down),
        ("Left", KeyCode::Left),
        ("Up", KeyCode::Up),
    ];

    for (name, code) in script {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_grid_key(&mut grid, &key);
        println!("after {name}:\n{}", outline(&grid));
    }
}
