//! Integration tests for auto-navigation through a window.

use trellis::prelude::*;

fn setup(rows: u32, columns: u32) -> Window {
    let mut window = Window::new();
    window
        .set_geometry(&WindowConfig::new(1290, 730, rows, columns).with_position(-5, -5))
        .unwrap();
    window
}

fn place_row(window: &mut Window, row: u32, count: u32) -> Vec<ControlId> {
    (0..count)
        .map(|column| {
            let id = window.insert(BasicControl::button());
            window.place_control(id, Cell::new(row, column)).unwrap();
            id
        })
        .collect()
}

fn link(window: &Window, id: ControlId, direction: Direction) -> Option<ControlId> {
    window.base(id).unwrap().link(direction)
}

#[test]
fn test_row_wraps_horizontally() {
    let mut window = setup(1, 3);
    let row = place_row(&mut window, 0, 3);

    window.auto_navigation(&NavigationOptions::default()).unwrap();

    assert_eq!(link(&window, row[1], Direction::Left), Some(row[0]));
    assert_eq!(link(&window, row[1], Direction::Right), Some(row[2]));
    assert_eq!(link(&window, row[0], Direction::Left), Some(row[2]));
    assert_eq!(link(&window, row[2], Direction::Right), Some(row[0]));
    assert_eq!(link(&window, row[0], Direction::Up), None);
}

#[test]
fn test_row_without_horizontal_wrap() {
    let mut window = setup(1, 3);
    let row = place_row(&mut window, 0, 3);

    let options = NavigationOptions::new().with_horizontal_wrap(false);
    window.auto_navigation(&options).unwrap();

    assert_eq!(link(&window, row[0], Direction::Left), None);
    assert_eq!(link(&window, row[2], Direction::Right), None);
    assert_eq!(link(&window, row[1], Direction::Left), Some(row[0]));
}

#[test]
fn test_grid_of_buttons() {
    let mut window = setup(3, 3);
    let rows: Vec<Vec<ControlId>> = (0..3).map(|row| place_row(&mut window, row, 3)).collect();

    let linked = window.auto_navigation(&NavigationOptions::default()).unwrap();
    assert_eq!(linked, 9 * 4);

    let centre = rows[1][1];
    assert_eq!(link(&window, centre, Direction::Up), Some(rows[0][1]));
    assert_eq!(link(&window, centre, Direction::Down), Some(rows[2][1]));
    assert_eq!(link(&window, rows[0][0], Direction::Up), Some(rows[2][0]));
    assert_eq!(link(&window, rows[2][2], Direction::Down), Some(rows[0][2]));
}

#[test]
fn test_default_filters() {
    let mut window = setup(1, 4);
    let row = place_row(&mut window, 0, 3);
    let label = window.insert(BasicControl::label());
    window.place_control(label, Cell::new(0, 3)).unwrap();
    window.set_enabled(row[1], false).unwrap();

    window.auto_navigation(&NavigationOptions::default()).unwrap();

    // The disabled button and the label do not take part.
    assert_eq!(link(&window, row[0], Direction::Right), Some(row[2]));
    assert_eq!(link(&window, row[2], Direction::Right), Some(row[0]));
    assert!(window.base(row[1]).unwrap().navigation().is_empty());
    assert!(window.base(label).unwrap().navigation().is_empty());
}

#[test]
fn test_inclusive_options() {
    let mut window = setup(1, 3);
    let row = place_row(&mut window, 0, 2);
    let label = window.insert(BasicControl::label());
    window.place_control(label, Cell::new(0, 2)).unwrap();
    window.set_visible(row[1], false).unwrap();

    let options = NavigationOptions::new()
        .with_invisible(true)
        .with_kinds(KindFilter::Any);
    window.auto_navigation(&options).unwrap();

    assert_eq!(link(&window, row[1], Direction::Right), Some(label));
    assert_eq!(link(&window, label, Direction::Right), Some(row[0]));
}

#[test]
fn test_subset_and_group_children() {
    let mut window = setup(1, 2);
    let group = window.insert(Group::new(1, 2).unwrap());
    window.place_control(group, Cell::new(0, 0)).unwrap();
    let inner: Vec<ControlId> = (0..2)
        .map(|column| {
            let id = window.insert(BasicControl::button());
            window
                .place_control_in(HostId::Group(group), id, Cell::new(0, column))
                .unwrap();
            id
        })
        .collect();
    let outside = window.insert(BasicControl::button());
    window.place_control(outside, Cell::new(0, 1)).unwrap();

    // Group children count as added controls.
    window.auto_navigation(&NavigationOptions::default()).unwrap();
    assert_eq!(link(&window, inner[1], Direction::Right), Some(outside));

    let options = NavigationOptions::new().with_controls(inner.clone());
    window.auto_navigation(&options).unwrap();
    assert_eq!(link(&window, inner[1], Direction::Right), Some(inner[0]));
    // Untouched by the subset pass.
    assert_eq!(link(&window, outside, Direction::Left), Some(inner[1]));
}

#[test]
fn test_repeated_subset_ids_count_once() {
    let mut window = setup(1, 2);
    let row = place_row(&mut window, 0, 2);

    let options = NavigationOptions::new().with_controls([row[0], row[1], row[0], row[1]]);
    assert_eq!(window.auto_navigation(&options), Ok(4));
    assert_eq!(link(&window, row[0], Direction::Right), Some(row[1]));
}

#[test]
fn test_unknown_subset_id() {
    let mut window = setup(1, 1);
    let stray = BasicControl::button();
    let options = NavigationOptions::new().with_controls([stray.id()]);
    assert_eq!(
        window.auto_navigation(&options),
        Err(Error::InvalidControl(stray.id()))
    );
}

#[test]
fn test_manual_links() {
    let mut window = setup(1, 2);
    let row = place_row(&mut window, 0, 2);
    window
        .set_navigation(row[0], Direction::Down, Some(row[1]))
        .unwrap();
    assert_eq!(link(&window, row[0], Direction::Down), Some(row[1]));
}

#[test]
fn test_solver_under_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let mut window = setup(2, 2);
        place_row(&mut window, 0, 2);
        place_row(&mut window, 1, 2);
        assert_eq!(window.auto_navigation(&NavigationOptions::default()), Ok(16));
    });
}
