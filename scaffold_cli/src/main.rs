//! # Ashiba CLI Application
//!
//! Terminal front-end for the scaffolding material estimator. Prompts for
//! the building dimensions and configuration choices, prints the material
//! take-off and per-side jack extensions, and saves the estimate into the
//! session's in-memory project list.
//!
//! Dimension input is passed through as raw text — normalization (blank or
//! malformed entries reading as 0) is the engine's job, not the prompt's.

use std::io::{self, BufRead, Write};

use scaffold_core::config::{
    FallPreventBars, RailCount, RailKind, RailSpec, ScaffoldConfig, ScaffoldType, Side,
};
use scaffold_core::estimate::estimate;
use scaffold_core::pitch::PitchStandard;
use scaffold_core::project::ProjectStore;

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_scaffold_type() -> ScaffoldType {
    match prompt_line("Scaffold type [1=Double-row, 2=Single-row] (1): ", "1").as_str() {
        "2" => ScaffoldType::SingleRow,
        _ => ScaffoldType::DoubleRow,
    }
}

fn prompt_pitch() -> PitchStandard {
    match prompt_line("Pitch standard [A=450/1,800, B=475/1,900] (A): ", "A")
        .to_uppercase()
        .as_str()
    {
        "B" => PitchStandard::B,
        _ => PitchStandard::A,
    }
}

fn prompt_rail(face: &str) -> RailSpec {
    let kind = match prompt_line(
        &format!("{} rail [1=Handrail (T-3.6), 2=Leading handrail] (1): ", face),
        "1",
    )
    .as_str()
    {
        "2" => RailKind::Leading,
        _ => RailKind::Standard,
    };

    // The count only matters for the standard style, but it is kept either way
    let count = match prompt_line(&format!("{} rail count [1-2] (2): ", face), "2").as_str() {
        "1" => RailCount::One,
        _ => RailCount::Two,
    };

    RailSpec { kind, count }
}

fn prompt_fall_prevent() -> FallPreventBars {
    match prompt_line("Fall-prevention bars [1-3] (1): ", "1").as_str() {
        "2" => FallPreventBars::Two,
        "3" => FallPreventBars::Three,
        _ => FallPreventBars::One,
    }
}

fn main() {
    println!("Ashiba CLI - Scaffolding Material Estimator");
    println!("===========================================");
    println!();

    let mut config = ScaffoldConfig::default();
    config.scaffold_type = prompt_scaffold_type();
    config.pitch = prompt_pitch();
    config.outer_rail = prompt_rail("Outer");
    config.inner_rail = prompt_rail("Inner");
    config.fall_prevent = prompt_fall_prevent();

    println!();
    println!("Per-side dimensions in mm. Leave blank to skip a side.");
    for side in Side::ALL {
        let dims = config.sides.get_mut(side);
        dims.width = prompt_line(&format!("{} width (mm): ", side.display_name()), "");
        dims.ground_level = prompt_line(
            &format!("{} ground level (mm) [0]: ", side.display_name()),
            "0",
        );
        dims.eave_height = prompt_line(&format!("{} eave height (mm): ", side.display_name()), "");
    }

    let result = estimate(&config);

    println!();
    println!("═══════════════════════════════════════");
    println!("  MATERIAL QUANTITIES");
    println!("═══════════════════════════════════════");
    println!();
    println!("Configuration:");
    println!("  Type:      {}", config.scaffold_type.display_name());
    println!("  Pitch:     {}", config.pitch.display_name());
    println!("  Outer:     {} x{}", config.outer_rail.kind.display_name(), config.outer_rail.coefficient());
    println!("  Inner:     {} x{}", config.inner_rail.kind.display_name(), config.inner_rail.coefficient());
    println!("  Fall bars: {}", config.fall_prevent.value());
    println!();
    println!("Quantities:");
    println!("  Posts:                {}", result.posts);
    println!("  Outer rails:          {}", result.outer_rails);
    println!("  Inner rails:          {}", result.inner_rails);
    println!("  Fall-prevention bars: {}", result.fall_bars);
    println!("  Vertical layers:      {}", result.steps);
    println!();
    println!("Recommended jack extension (mm):");
    for side in Side::ALL {
        println!(
            "  {:<6} {:>8.0}",
            side.display_name(),
            result.jack.get(side).value()
        );
    }
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for records):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    println!();
    let title = prompt_line("Project title [Untitled]: ", "Untitled");
    let detail = prompt_line("Project detail: ", "");

    let mut store = ProjectStore::new();
    let id = store.create(title, detail, config);
    if let Some(project) = store.get(id) {
        println!();
        println!("Saved project #{}: {}", project.id, project.title);
        match project.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error exporting project: {} ({})", e, e.error_code()),
        }
    }
}
