use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keytravel::geometry::{Finger, Hand};
use keytravel::layout::{Key, EMPTY_LABEL};
use keytravel::scorer::FingerTravel;

fn finger_color(finger: Finger) -> Color {
    match finger.hand() {
        Hand::Left => Color::Green,
        Hand::Right => Color::Blue,
        Hand::Either => Color::Grey,
    }
}

pub fn print_layout_table(name: &str, layout: &[Key]) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Char").add_attribute(Attribute::Bold),
        Cell::new("Finger"),
        Cell::new("X"),
        Cell::new("Y"),
    ]);

    for (i, key) in layout.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Right),
            Cell::new(key.character.unwrap_or(EMPTY_LABEL)).set_alignment(CellAlignment::Center),
            Cell::new(key.finger).fg(finger_color(key.finger)),
            Cell::new(format!("{:.1}", key.x)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", key.y)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_travel_report(travel: &FingerTravel) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Finger").add_attribute(Attribute::Bold),
        Cell::new("Presses"),
        Cell::new("Travel").fg(Color::Cyan),
        Cell::new("Share"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let total = travel.total();
    for (finger, stats) in &travel.per_finger {
        let share = if total > 0.0 {
            stats.distance / total * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(finger).fg(finger_color(*finger)),
            Cell::new(stats.presses),
            Cell::new(format!("{:.2}", stats.distance)).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", share)),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(travel.total_presses()),
        Cell::new(format!("{:.2}", total)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    println!("\n{}", table);
    if travel.skipped_chars > 0 {
        println!("({} characters of the text have no key and were skipped)", travel.skipped_chars);
    }
}

pub fn print_finger_list() {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Finger").add_attribute(Attribute::Bold),
        Cell::new("Hand"),
    ]);
    for finger in Finger::assignable() {
        table.add_row(vec![
            Cell::new(finger).fg(finger_color(finger)),
            Cell::new(format!("{:?}", finger.hand())),
        ]);
    }
    println!("{}", table);
}
