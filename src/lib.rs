pub mod geometry;
pub mod cloud;
pub mod transform;
pub mod measure;
pub mod args;
pub mod io;
mod crate_errors;

pub use crate_errors::{
    RaycastError,
    RaycastResult,
};
pub use geometry::{
    Axis,
    Face,
    Matrix4d,
    Point,
    Vertex,
};

/// Print an example transform config file in the requested format.
pub fn example_config(format: io::Format) -> RaycastResult<()> {
    let example = transform::TransformTarget::example();
    println!("{}", io::to_format_string(&example, format)?);
    Ok(())
}

/// [Stage 1.]
/// Check the parsed command line arguments.
/// Returns a `RaycastResult` with the command to run or an `Err`.
pub fn handle_cli_args(cli_args: args::RaycastCli) -> RaycastResult<args::Command> {
    args::check_paths(&cli_args.sub_command)?;
    Ok(cli_args.sub_command)
}

/// [Stage 2.]
/// Run the requested command.
/// Returns a `RaycastResult` with `()` or an `Err`.
pub fn run_process(command: args::Command) -> RaycastResult<()> {
    match command {
        args::Command::Transform(transform_cli) => {
            log::info!("Loading transform config file: {}...", transform_cli.cfg_path);
            let target = transform::TransformTarget::from_cfg_file(&transform_cli.cfg_path)?;
            log::info!("Transforming {} with {} matrices...", target.input_path, target.matrices.len());
            let cloud = transform::do_transform(&target)?;
            transform::save_transform(&target, &cloud)?;
        },
        args::Command::Measure(measure_cli) => {
            log::info!("Measuring points in {}...", measure_cli.input_path);
            let report = measure::do_measure(&measure_cli.input_path)?;
            println!("{}", io::to_format_string(&report, measure_cli.format)?);
        },
        args::Command::Example(example_cli) => {
            example_config(example_cli.format)?;
        },
    }
    Ok(())
}
