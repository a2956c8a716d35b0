use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use frame_core::chain::evaluate_repeated;
use frame_core::{
    evaluate, static_index, ChainSettings, DispatchScalar, ExampleLayout, ExampleStaticFrame,
    ExampleStaticSystem, Frame, FrameSnapshot, IntermediateShape,
};
use log::debug;
use std::num::NonZeroUsize;

#[derive(Parser, Debug)]
#[command(
    name = "frame_demo",
    about = "Evaluate the example double-integrator system on a static frame"
)]
struct Cli {
    /// Scalar type the frames are instantiated with
    #[arg(long, value_enum, default_value_t = ScalarArg::F64)]
    scalar: ScalarArg,

    /// Initial velocity stored in the input frame
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    qdot: f64,

    /// Number of chained stages for the second evaluation
    #[arg(long, default_value_t = NonZeroUsize::new(2).unwrap_or(NonZeroUsize::MIN))]
    depth: NonZeroUsize,

    /// Frame the chain's intermediate vector copies its layout from
    #[arg(long, value_enum, default_value_t = ShapeArg::Output)]
    intermediate: ShapeArg,

    /// Print frames as JSON snapshots instead of rows
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScalarArg {
    F64,
    I32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShapeArg {
    Output,
    Input,
}

impl From<ShapeArg> for IntermediateShape {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Output => IntermediateShape::Output,
            ShapeArg::Input => IntermediateShape::Input,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    debug!("{cli:?}");

    match cli.scalar {
        ScalarArg::F64 => run::<f64>(&cli),
        ScalarArg::I32 => run::<i32>(&cli),
    }
}

fn run<T>(cli: &Cli) -> Result<()>
where
    T: DispatchScalar + serde::Serialize,
{
    let (single, chained) = evaluate_frames::<T>(cli)?;
    print_snapshot(&single, cli.json)?;
    print_snapshot(&chained, cli.json)
}

/// Runs the example system once, then chained `cli.depth` times, on the same input.
fn evaluate_frames<T: DispatchScalar>(cli: &Cli) -> Result<(FrameSnapshot<T>, FrameSnapshot<T>)> {
    let qdot = initial_velocity::<T>(cli.qdot, cli.scalar)?;

    let system = ExampleStaticSystem;
    let mut x = ExampleStaticFrame::<T>::new();
    let mut xdot = ExampleStaticFrame::<T>::new();
    x.set_value(static_index!(ExampleLayout, "qdot"), qdot);

    evaluate::<T>(&system, &x, &mut xdot).context("Failed to evaluate example dynamics.")?;
    let single = FrameSnapshot::<T>::capture(&xdot);

    let settings = ChainSettings {
        intermediate: cli.intermediate.into(),
        ..ChainSettings::default()
    };
    debug!("evaluating {} chained stages with {settings:?}", cli.depth);
    evaluate_repeated::<T>(&system, cli.depth, settings, &x, &mut xdot)
        .context("Failed to evaluate chained dynamics.")?;
    Ok((single, FrameSnapshot::<T>::capture(&xdot)))
}

/// Converts `--qdot` to the selected scalar, rejecting values that would be
/// rounded or truncated.
fn initial_velocity<T: DispatchScalar>(qdot: f64, scalar: ScalarArg) -> Result<T> {
    let value: T = num_traits::cast(qdot)
        .with_context(|| format!("qdot {qdot} is not representable as {scalar:?}"))?;
    let round_trip: Option<f64> = num_traits::cast(value);
    if round_trip != Some(qdot) {
        bail!("qdot {qdot} is not representable as {scalar:?}");
    }
    Ok(value)
}

fn print_snapshot<T>(snapshot: &FrameSnapshot<T>, json: bool) -> Result<()>
where
    T: DispatchScalar + serde::Serialize,
{
    if json {
        println!(
            "{}",
            serde_json::to_string(snapshot).context("Failed to serialize frame snapshot.")?
        );
    } else {
        println!("{snapshot}");
    }
    Ok(())
}
