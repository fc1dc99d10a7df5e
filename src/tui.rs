use colorful::{Colorful, RGB as ColorfulRgb};

/// Prints a colored log to the console (defaults to `use tui::colors::salmon`)
pub fn print_color(log: &str, color: Option<ColorfulRgb>) {
    let color = color.unwrap_or(colors::salmon());
    println!("{}", log.color(color));
}

/// Fatal diagnostics, `❌ Error: ...` followed by any extra lines of the message
pub fn error(log: &str) {
    let mut lines = log.lines();
    if let Some(first) = lines.next() {
        print_color(&format!("❌ Error: {}", first), None);
    }
    for line in lines {
        print_color(line, None);
    }
}

pub mod colors {
    use colorful::RGB as ColorfulRgb;

    pub fn salmon() -> ColorfulRgb {
        ColorfulRgb::new(255, 125, 127)
    }
}
