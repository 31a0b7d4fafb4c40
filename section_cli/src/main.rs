//! # Sectio CLI
//!
//! Prompts for an LNP angle, a corrosion allowance and a steel grade, then
//! prints the section properties and their JSON form.
//!
//! Set `RUST_LOG=section_core=debug` to trace how the profile is assembled.
//! `SECTION_ARC_SEGMENTS` sets the polygon resolution used for the outline
//! and the plastic moduli.

use std::io::{self, BufRead, Write};

use section_core::cross_section::MaterialCrossSection;
use section_core::materials::SteelGrade;
use section_core::profiles::{catalog, LnpProfile};
use section_core::properties::SectionProperties;
use section_core::{GeometrySettings, SectionError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn build(designation: &str, corrosion_mm: f64, grade: SteelGrade) -> Result<MaterialCrossSection<LnpProfile>, SectionError> {
    let angle = LnpProfile::from_catalog(designation, corrosion_mm, grade)?;
    Ok(MaterialCrossSection::new(angle, grade))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let settings = GeometrySettings::from_env();
    info!(
        arc_segments = settings.arc_segments,
        grid_divisions = settings.grid_divisions,
        "geometry settings loaded"
    );

    println!("Sectio CLI - Cross-Section Properties");
    println!("=====================================");
    println!();
    println!("Available: {}", catalog::designations().join(", "));
    println!();

    let designation = prompt_line("Enter profile [LNP 100x50x6]: ").unwrap_or_else(|| "LNP 100x50x6".to_string());
    let corrosion_mm = prompt_f64("Enter corrosion allowance (mm) [0.0]: ", 0.0);
    let grade = prompt_line("Enter steel grade [S235]: ")
        .and_then(|s| s.parse::<SteelGrade>().ok())
        .unwrap_or(SteelGrade::S235);

    info!(designation = %designation, corrosion_mm, %grade, "computing section");

    match build(&designation, corrosion_mm, grade) {
        Ok(member) => {
            let angle = member.section();
            let composite = angle.section();
            let c = angle.centroid();
            let (w_pl_x, w_pl_y) = composite.plastic_moduli_with(&settings);
            let outline = composite.outline(&settings);
            let vertices: usize = outline.iter().map(|contour| contour.points.len()).sum();
            println!();
            println!("═══════════════════════════════════════");
            println!("  {}", angle.designation());
            println!("═══════════════════════════════════════");
            println!();
            println!("Geometry:");
            println!("  A      = {:.1} mm²", angle.area());
            println!("  U      = {:.1} mm", composite.outline_length(&settings));
            println!("  e_x    = {:.2} mm", c.x);
            println!("  e_y    = {:.2} mm", c.y);
            println!(
                "  outline: {} contour(s), {} vertices at {} segments per circle",
                outline.len(),
                vertices,
                settings.arc_segments
            );
            println!();
            println!("Stiffness:");
            println!("  I_xx   = {:.0} mm⁴", angle.moment_of_inertia_xx());
            println!("  I_yy   = {:.0} mm⁴", angle.moment_of_inertia_yy());
            println!("  I_xy   = {:.0} mm⁴", angle.product_of_inertia_xy());
            println!("  W_el,x = {:.0} mm³", angle.elastic_section_modulus_xx());
            println!("  W_el,y = {:.0} mm³", angle.elastic_section_modulus_yy());
            println!("  W_pl,x = {:.0} mm³", w_pl_x);
            println!("  W_pl,y = {:.0} mm³", w_pl_y);
            println!();
            println!("Material: {}", member.material());
            println!("  G      = {:.2} kg/m", member.weight_per_length().0);
            match member.governing_yield_strength() {
                Ok(fy) => println!("  f_y    = {:.0} MPa", fy.0),
                Err(e) => println!("  f_y    = n/a ({})", e),
            }
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&member.summary()) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
