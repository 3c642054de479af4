use joukowsky_rs::airfoil::generate::generate;
use joukowsky_rs::airfoil::AirfoilSpec;
use joukowsky_rs::export::{export, export_json};
use joukowsky_rs::flow::{field, FlowGrid};
use joukowsky_rs::plot::{PlotOptions, Plotter};
use joukowsky_rs::FoilResult;

fn load_spec() -> FoilResult<AirfoilSpec> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading airfoil spec from {}", path);
            AirfoilSpec::from_json_file(path)
        }
        None => AirfoilSpec::new(1.0, 0.9, 5.0, 100),
    }
}

fn run() -> FoilResult<()> {
    let spec = load_spec()?;
    let foil = generate(&spec)?;
    log::info!(
        "Generated {} points, chord {:.4}, cL {:.4}",
        foil.len(),
        foil.chord_length(),
        spec.lift_coefficient()
    );

    export(&foil, "foil.csv")?;
    export_json(&spec, &foil, "foil.json")?;

    let plotter = Plotter::default();
    let title = format!("Joukowsky foil (t = {}, beta = {}°)", spec.t(), spec.beta());
    plotter.save_foil(&foil, &PlotOptions::titled(&title).with_grid(), "foil.png")?;
    plotter.save_lift(&spec.lift_curve(), "lift.png")?;

    let body = generate(&spec.with_attack(0.0)?)?;
    let grid = FlowGrid::around(&spec, 4.0, 200, 200)?;
    let flow = field(&spec, 1.0, spec.alpha(), &grid)?;
    plotter.save_streamlines(&flow, &body, 40, "streamlines.png")?;

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
