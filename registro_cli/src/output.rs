use colored::Colorize;
use registro_sdk::{Screen, Surface};

/// Write the screen's current surface to the terminal.
pub fn print_screen(screen: &Screen) {
    match screen.surface() {
        Some(surface) if !surface.units.is_empty() => print_surface(surface),
        Some(_) => println!("\n{}", "No records on the chain yet".yellow()),
        None => {}
    }
}

fn print_surface(surface: &Surface) {
    for unit in &surface.units {
        println!("\n{}", unit.heading.cyan().bold());
        println!("{}", "─".repeat(40).bright_black());
        for field in &unit.fields {
            println!("{}: {}", field.label.bright_white(), field.value);
        }
    }
}
