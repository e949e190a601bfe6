use std::path::Path;

use clarity_core::compare::{Comparison, PhotoSlot};
use clarity_core::quality::SharpnessScore;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    winner: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            winner: Style::new().green().bold(),
        }
    }
}

pub fn print_comparison(path_a: &Path, path_b: &Path, comparison: &Comparison) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Clarity Comparison"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    print_score_section(&s, PhotoSlot::A, path_a, &comparison.score_a);
    print_score_section(&s, PhotoSlot::B, path_b, &comparison.score_b);

    let pct = &comparison.percentages;
    println!("  {}", s.header.apply_to("Result"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Split"),
        s.value.apply_to(format!("A {}%  /  B {}%", pct.a, pct.b))
    );
    let verdict = comparison.to_string();
    match comparison.leading_slot() {
        Some(_) => println!("    {}", s.winner.apply_to(verdict)),
        None => println!("    {}", s.disabled.apply_to(verdict)),
    }
    println!();
}

fn print_score_section(s: &Styles, slot: PhotoSlot, path: &Path, score: &SharpnessScore) {
    println!("  {}", s.header.apply_to(format!("Image {slot}")));
    println!(
        "    {:<12}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(score.method)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Score"),
        s.value.apply_to(format!("{:.6}", score.value))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Laplacian"),
        s.value.apply_to(format!("{:.6}", score.laplacian_value))
    );
    match score.tenengrad_value {
        Some(t) => println!(
            "    {:<12}{}",
            s.label.apply_to("Tenengrad"),
            s.value.apply_to(format!("{t:.6}"))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Tenengrad"),
            s.disabled.apply_to("not needed")
        ),
    }
    println!();
}
