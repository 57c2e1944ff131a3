//! Example: Default Moody Chart
//!
//! Composes the Moody chart with the default configuration and writes it
//! as SVG and PNG to the system temporary directory:
//!
//! - Laminar line `f = 64/Re` up to Re = 2300
//! - Dashed critical-zone interpolation between Re = 2000 and 4000
//! - 27 constant-roughness Colebrook curves, from smooth pipes to ε/D = 0.15
//! - Dashed boundary of complete turbulence
//!
//! Also compares the default ten-sweep iteration against a converged
//! solve for a few roughness values.

use moody_chart::{
    chart::{MoodyComposer, MoodyConfig},
    output::{plot_moody_chart, RenderConfig},
    solver::{colebrook_residual,
             ColebrookSolver,
             FrictionSolver,
             SolverConfiguration},
};
use nalgebra::DVector;

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Moody Chart - Default Configuration");
    println!("═══════════════════════════════════════════════════════\n");

    let config = MoodyConfig::default();

    println!("Plot range:");
    println!("  Re : [{:e}, {:e}]", config.re_plot_min, config.re_plot_max);
    println!("  f  : [{}, {}]", config.f_plot_min, config.f_plot_max);
    println!("  Samples   : {}", config.samples);
    println!("  Roughness : {} curves\n", config.roughness.len());

    // ====== Compose ======

    let start = Instant::now();
    let chart = MoodyComposer::new(config).compose()?;
    let elapsed = start.elapsed();

    println!("Composed in {:.2} ms", elapsed.as_secs_f64() * 1e3);
    println!("  {}\n", chart.summary());

    for diagnostic in &chart.diagnostics {
        println!("  ⚠ {diagnostic}");
    }

    // ====== Fixed sweeps vs converged ======

    println!("Ten sweeps vs converged (Re = 1e3 .. 1e8):");
    let reynolds = DVector::from_vec(vec![1e3, 1e4, 1e5, 1e6, 1e7, 1e8]);
    let solver = ColebrookSolver::new();
    for relative_roughness in [0.0, 1e-5, 1e-3, 5e-2] {
        let fixed = solver.solve(&reynolds, relative_roughness, &SolverConfiguration::default())?;
        let tight = solver.solve(
            &reynolds,
            relative_roughness,
            &SolverConfiguration::converged(1e-14, 200),
        )?;
        let worst = fixed
            .friction
            .iter()
            .zip(reynolds.iter())
            .map(|(&f, &re)| colebrook_residual(re, relative_roughness, f).abs())
            .fold(0.0, f64::max);
        println!(
            "  ε/D = {:<8} max residual after 10 sweeps = {:.2e} ({} sweeps to converge)",
            relative_roughness, worst, tight.iterations
        );
    }

    // ====== Render ======

    let tmp_dir = std::env::temp_dir();
    let render = RenderConfig::default().with_dpi(150.0);

    for extension in ["svg", "png"] {
        let path = tmp_dir.join(format!("moody_default.{extension}"));
        let path_str = path.to_str().ok_or("temporary path is not valid UTF-8")?;
        plot_moody_chart(&chart, path_str, Some(&render))?;
        println!("\n✓ Written {}", path.display());
    }

    Ok(())
}
