use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use nd_dice::DieKind;
use nd_dice::dice::face_code;

pub fn run() -> Result<(), String> {
    println!("  {}", "Narrative Dice".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Faces", "Outcomes"]);

    for kind in DieKind::ALL {
        let outcomes: Vec<String> = kind.faces().iter().map(|f| face_code(*f)).collect();
        table.add_row(vec![
            kind.name().to_string(),
            kind.sides().to_string(),
            outcomes.join(" "),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {}",
        "S success  A advantage  C triumph  F failure  T threat  D despair  - blank".dimmed()
    );
    Ok(())
}
