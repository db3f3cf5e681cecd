use std::error::Error;

use clap::Args;
use mobius_heat::{analyze_envelope, EnvelopeOpts, Geometry, KernelSpec, DEFAULT_ALPHA_INVERSE};

use crate::render;

#[derive(Args, Debug)]
pub struct EnvelopeArgs {
    /// Observed 1/alpha value (default CODATA 2018-ish).
    #[arg(long, default_value_t = DEFAULT_ALPHA_INVERSE)]
    pub alpha: f64,
    /// Force dA0(Maxwell) = dA0(Dirac) = 0 to illustrate the A2-dominated ratio.
    #[arg(long = "zero-A0")]
    pub zero_a0: bool,
    /// Optional dA4 for the Maxwell parity difference.
    #[arg(long = "max-dA4", default_value_t = 0.0)]
    pub max_d_a4: f64,
    /// Optional dA6 for the Maxwell parity difference.
    #[arg(long = "max-dA6", default_value_t = 0.0)]
    pub max_d_a6: f64,
    /// Optional dA4 for the Dirac parity difference.
    #[arg(long = "dir-dA4", default_value_t = 0.0)]
    pub dir_d_a4: f64,
    /// Optional dA6 for the Dirac parity difference.
    #[arg(long = "dir-dA6", default_value_t = 0.0)]
    pub dir_d_a6: f64,
    /// Comma-separated t values for evaluating C_env(t).
    #[arg(
        long = "t-grid",
        value_delimiter = ',',
        default_values_t = [0.1, 0.05, 0.02, 0.01, 0.005]
    )]
    pub t_grid: Vec<f64>,
    /// Print K_odd(t) values for the S^1 factor (for confirmation).
    #[arg(long = "print-odd-kernel")]
    pub print_odd_kernel: bool,
    /// Emit the report as canonical JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &EnvelopeArgs) -> Result<i32, Box<dyn Error>> {
    let opts = EnvelopeOpts {
        alpha_inverse: args.alpha,
        zero_a0: args.zero_a0,
        maxwell_d_a4: args.max_d_a4,
        maxwell_d_a6: args.max_d_a6,
        dirac_d_a4: args.dir_d_a4,
        dirac_d_a6: args.dir_d_a6,
        t_grid: args.t_grid.clone(),
        kernel: args.print_odd_kernel.then(KernelSpec::default),
    };
    let report = analyze_envelope(&Geometry::default(), &opts)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::envelope(&report));
    }
    Ok(0)
}
