//! Example: Spanish Monochrome Moody Chart
//!
//! Loads a partial JSON configuration over the defaults: Spanish labels,
//! black lines, a wider Reynolds range and a reduced roughness table with
//! one entry whose onset leaves no Reynolds numbers inside the plot.
//!
//! Shows how the composer reports skipped curves instead of failing.

use moody_chart::{
    chart::{CurveKind, MoodyComposer, MoodyConfig},
    output::{plot_moody_chart, RenderConfig},
};

const CONFIG: &str = r#"{
    "lang": "es",
    "color": "mono",
    "re_plot_max": 1e9,
    "roughness": [
        { "relative_roughness": 0.0,    "onset": null },
        { "relative_roughness": 0.0001, "onset": null },
        { "relative_roughness": 0.001,  "onset": null },
        { "relative_roughness": 0.01,   "onset": null },
        { "relative_roughness": 1e-9,   "onset": 1e18 }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Moody Chart - Spanish, Monochrome");
    println!("═══════════════════════════════════════════════════════\n");

    let config = MoodyConfig::from_json_str(CONFIG)?;
    println!("Language : {}", config.lang.as_str());
    println!("Color    : {}", config.color.as_str());
    println!("Re max   : {:e}\n", config.re_plot_max);

    let chart = MoodyComposer::new(config).compose()?;
    println!("{}\n", chart.summary());

    println!("Roughness labels:");
    for label in &chart.roughness_labels {
        println!("  {:>10}  at Re = {:.3e}, f = {:.4}", label.text, label.position.0, label.position.1);
    }

    println!("\nSkipped roughness values: {:?}", chart.skipped_roughness());

    if let Some(boundary) = chart.curves_of(CurveKind::FullyRoughBoundary).next() {
        println!(
            "Complete turbulence boundary: {} points, f down to {:.4}",
            boundary.len(),
            boundary.min_friction().unwrap_or(f64::NAN)
        );
    }

    let path = std::env::temp_dir().join("moody_es_mono.svg");
    let path_str = path.to_str().ok_or("temporary path is not valid UTF-8")?;
    plot_moody_chart(&chart, path_str, Some(&RenderConfig::default().with_title("Diagrama de Moody")))?;
    println!("\n✓ Written {}", path.display());

    Ok(())
}
