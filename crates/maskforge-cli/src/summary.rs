use std::path::PathBuf;

use console::Style;
use maskforge_core::geometry::DisplayGeometry;

/// What a single `render` produced.
pub struct RenderReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub preview: Option<PathBuf>,
    pub geometry: DisplayGeometry,
    pub events: usize,
    pub events_applied: usize,
    pub strokes: usize,
    pub marked_display_pixels: usize,
    pub coverage: f64,
    pub edit_pixels: usize,
}

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(report: &RenderReport) {
    let s = Styles::new();
    let g = &report.geometry;

    println!();
    println!("  {}", s.title.apply_to("Mask Render"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(report.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mask"),
        s.path.apply_to(report.output.display())
    );
    match report.preview {
        Some(ref p) => println!(
            "  {:<14}{}",
            s.label.apply_to("Preview"),
            s.path.apply_to(p.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Preview"),
            s.disabled.apply_to("disabled")
        ),
    }

    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.value
            .apply_to(format!("{}x{}", g.source_width, g.source_height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Display"),
        s.value.apply_to(format!(
            "{}x{} (scale {:.3} x {:.3})",
            g.display_width, g.display_height, g.sx, g.sy
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Events"),
        s.value
            .apply_to(format!("{} ({} applied)", report.events, report.events_applied))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Strokes"),
        s.value.apply_to(report.strokes)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Marked"),
        s.value.apply_to(format!(
            "{} display px ({:.1}%)",
            report.marked_display_pixels,
            report.coverage * 100.0
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Edit pixels"),
        s.value.apply_to(report.edit_pixels)
    );
    println!();
}
