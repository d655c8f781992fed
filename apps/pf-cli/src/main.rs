use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pf_app::{AppError, AppResult, ReportStatus, sample_case, service};
use pf_solver::{EngineError, OperatingLimits, SearchSpace, SolverConfig};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "Pneuflow CLI - Dilute-phase pneumatic conveying sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and input ranges
    Validate {
        /// Path to the case JSON file
        case_path: PathBuf,
    },
    /// Run the pressure-drop calculation for a case
    Run {
        /// Path to the case JSON file
        case_path: PathBuf,
        /// Emit the raw response envelope as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scan pipe diameters and pick-up velocities for feasible designs
    Suggest {
        /// Path to the case JSON file
        case_path: PathBuf,
        /// Emit the raw response envelope as JSON
        #[arg(long)]
        json: bool,
        /// Lowest pick-up velocity to try, m/s
        #[arg(long)]
        min_vin: Option<f64>,
        /// Highest pick-up velocity to try, m/s
        #[arg(long)]
        max_vin: Option<f64>,
        /// Velocity scan step, m/s
        #[arg(long)]
        step_vin: Option<f64>,
        /// Outlet gas velocity limit, m/s
        #[arg(long)]
        max_vout: Option<f64>,
        /// Solids loading ratio limit
        #[arg(long)]
        max_loading: Option<f64>,
        /// Bore diameters to scan, inches (comma separated)
        #[arg(long, value_delimiter = ',')]
        diameters: Option<Vec<f64>>,
    },
    /// Write the built-in example case
    Example {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run { case_path, json } => cmd_run(&case_path, json),
        Commands::Suggest {
            case_path,
            json,
            min_vin,
            max_vin,
            step_vin,
            max_vout,
            max_loading,
            diameters,
        } => {
            let mut space = SearchSpace::default();
            if let Some(v) = min_vin {
                space.vin_min_ms = v;
            }
            if let Some(v) = max_vin {
                space.vin_max_ms = v;
            }
            if let Some(v) = step_vin {
                space.vin_step_ms = v;
            }
            if let Some(list) = diameters {
                space.diameters_in = list;
            }

            let mut limits = OperatingLimits::default();
            if let Some(v) = max_vout {
                limits.max_vout_ms = v;
            }
            if let Some(v) = max_loading {
                limits.max_r_loading = v;
            }

            cmd_suggest(&case_path, json, &space, limits)
        }
        Commands::Example { out } => cmd_example(out.as_deref()),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = service::load_case(case_path)?;
    case.validate().map_err(EngineError::from)?;
    println!("✓ Case is valid ({} segments)", case.segments.len());
    Ok(())
}

fn cmd_run(case_path: &Path, json: bool) -> AppResult<()> {
    let case = service::load_case(case_path)?;
    let response = service::run(&case);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let Some(results) = response.results else {
        return Err(AppError::Engine(
            response.error.unwrap_or_else(|| "run failed".to_string()),
        ));
    };

    println!("✓ Run completed");
    println!(
        "  Route: {} sections, {:.1} m ({:.0} equivalent ft)",
        results.segmentation.sections.len(),
        results.segmentation.total_m,
        results.segmentation.total_ft
    );
    println!(
        "  Pressure drop: {:.3} bar ({:.2} psi)",
        results.pressure_drop.dp_bar_total, results.pressure_drop.dp_psi_total
    );
    println!(
        "  Outlet velocity: {:.2} m/s (pick-up {:.2} m/s)",
        results.pressure_drop.final_vout_ms, results.inputs.flow.vin_ms
    );

    let summary = &results.summary_data;
    println!("\nSummary:");
    println!("  Material: {} at {} t/h", summary.solids_material, summary.ms_tph);
    println!("  Solids loading: {:.2}", results.flow.r_loading);
    println!("  Gas temperature required: {:.1} °C", summary.final_temp_c);
    println!(
        "  Gas flow: {:.1} m³/h std ({:.0} SCFM)",
        summary.q_std_m3h, summary.q_stf_scfm
    );
    println!(
        "  Required pressure: {:.2} psig (atmospheric {:.2} psi)",
        summary.preq_psi, summary.patm_psi
    );

    Ok(())
}

fn cmd_suggest(
    case_path: &Path,
    json: bool,
    space: &SearchSpace,
    limits: OperatingLimits,
) -> AppResult<()> {
    let case = service::load_case(case_path)?;
    let response = service::suggest(&case, space, limits, SolverConfig::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let Some(report) = response.report else {
        return Err(AppError::Engine(
            response.error.unwrap_or_else(|| "search failed".to_string()),
        ));
    };

    println!(
        "Sizing report ({:.1}-{:.1} m/s in {:.1} m/s steps):",
        space.vin_min_ms, space.vin_max_ms, space.vin_step_ms
    );
    for entry in &report {
        match (entry.status, &entry.solution, &entry.reason) {
            (ReportStatus::Success, Some(sol), _) => println!(
                "  {:>4.0} in  ✓  Vin {:>5.2} m/s   Vout {:>5.2} m/s   R {:>6.2}   Preq {:>5.2} bar",
                entry.d_in, sol.vin_ms, sol.vout_ms, sol.r_loading, sol.preq_bar
            ),
            (_, _, Some(reason)) => println!("  {:>4.0} in  ✗  {}", entry.d_in, reason),
            _ => println!("  {:>4.0} in  ✗", entry.d_in),
        }
    }

    Ok(())
}

fn cmd_example(out: Option<&Path>) -> AppResult<()> {
    let case = sample_case();

    if let Some(path) = out {
        service::save_case(path, &case)?;
        println!("✓ Wrote example case to {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&case)?);
    }

    Ok(())
}
