use std::error::Error;

use clap::Args;
use mobius_ahss::{verify_index, AhssInputs, PhysicalInputs};

use crate::render;

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Reference (Planck) density in kg/m³.
    #[arg(long = "planck-density", default_value_t = 5.16e96)]
    pub planck_density: f64,
    /// Observed vacuum density in kg/m³ (ΛCDM consensus).
    #[arg(long = "observed-density", default_value_t = 5.83e-27)]
    pub observed_density: f64,
    /// Emit the report as canonical JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &IndexArgs) -> Result<i32, Box<dyn Error>> {
    let physical = PhysicalInputs {
        planck_density: args.planck_density,
        observed_density: args.observed_density,
    };
    let report = verify_index(&AhssInputs::default(), &physical)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::index(&report));
    }
    Ok(if report.pass { 0 } else { 1 })
}
