//! End-to-end flows a picker UI drives: wheel picks, slider writes, and
//! list picks, observed the way the list view and sliders observe them.

use std::cell::RefCell;
use std::rc::Rc;

use floem_swatch::{
    compare_names, Channel, Color, ColorWheel, ListChange, NamedColor, SelectionChange,
    SelectionState,
};
use pretty_assertions::assert_eq;

#[test]
fn list_view_scrolls_to_the_linked_entry() {
    let mut selection = SelectionState::new();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    selection.subscribe(move |change| sink.borrow_mut().push(*change));

    // the list view looks the color up itself on every color change
    let mut scrolled_to = Vec::new();
    let mut drain = |selection: &SelectionState| {
        let color_changed = changes
            .borrow_mut()
            .drain(..)
            .any(|c| c == SelectionChange::Color);
        if color_changed {
            if let Some(named) = NamedColor::from_color(selection.color()) {
                scrolled_to.push(named.name());
            }
        }
    };

    selection.set_channel(Channel::Red, 255);
    drain(&selection);
    selection.set_channel(Channel::Green, 165);
    drain(&selection);
    selection.set_channel(Channel::Blue, 1);
    drain(&selection);

    assert_eq!(scrolled_to, vec!["Red", "Orange"]);
}

#[test]
fn wheel_to_selection() {
    let mut wheel = ColorWheel::new();
    let mut selection = SelectionState::new();

    let raster = wheel.ensure(300, 200);
    assert_eq!(raster.diameter(), 200);
    let r = raster.radius() as f64;

    let picked = selection.pick_from_wheel(raster, r, r + 50.0).expect("inside the disk");
    assert_eq!(selection.color(), picked);
    let hsb = selection.hsb();
    assert!(hsb.hue.abs() < 1e-9);
    assert!((hsb.saturation - 0.5).abs() < 0.01);
    assert_eq!(selection.named_color(), None);

    // right of the disk, still inside the canvas
    assert_eq!(wheel.pick(250.0, 100.0), None);
}

#[test]
fn one_color_write_per_external_mutation() {
    let mut selection = SelectionState::new();
    let writes = Rc::new(RefCell::new(0));
    let moves = Rc::new(RefCell::new(0));
    let w = writes.clone();
    selection.subscribe(move |c| {
        if *c == SelectionChange::Color {
            *w.borrow_mut() += 1;
        }
    });
    let m = moves.clone();
    selection.subscribe_colors(move |c| {
        if *c == ListChange::SelectedItem {
            *m.borrow_mut() += 1;
        }
    });

    selection.set_color(Color::from_rgb8(0, 0, 255));
    assert_eq!((*writes.borrow(), *moves.borrow()), (1, 1));

    selection.select_by_name("Magenta");
    assert_eq!((*writes.borrow(), *moves.borrow()), (2, 2));

    selection.select_by_name("Fuchsia");
    assert_eq!((*writes.borrow(), *moves.borrow()), (2, 3));

    selection.set_color(Color::from_rgb8(255, 0, 255));
    assert_eq!((*writes.borrow(), *moves.borrow()), (2, 3));
}

#[test]
fn catalog_listing_is_sorted() {
    let selection = SelectionState::new();
    let names: Vec<&str> = selection.colors().iter().map(|n| n.name()).collect();
    let mut sorted = names.clone();
    sorted.sort_by(|a, b| compare_names(Some(*a), Some(*b)));
    assert_eq!(names, sorted);
    assert_eq!(names.len(), NamedColor::all().len());
}
