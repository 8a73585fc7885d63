use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use license_files::ScanReport;

/// Render a colored terminal report.
pub fn render(report: &ScanReport, quiet: bool) -> Result<()> {
    if quiet {
        for file in &report.files {
            println!("{}", file.name);
        }
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "license-files".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", report.path.display());

    match report.best() {
        Some(best) => println!(" {} License file: {}\n", "✓".green(), best.name.as_str().bold()),
        None => {
            println!(" {} No license file found\n", "✗".red());
            return Ok(());
        }
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Rule").add_attribute(Attribute::Bold),
        ]);

    for (i, file) in report.files.iter().enumerate() {
        let name = if i == 0 {
            Cell::new(&file.name).fg(Color::Green)
        } else {
            Cell::new(&file.name)
        };

        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            name,
            Cell::new(&file.rule).fg(Color::DarkGrey),
        ]);
    }

    println!("{}", table);
    Ok(())
}
