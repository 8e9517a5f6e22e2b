fn main() {
    let cli_args = raycast::args::parse_cli_args();

    env_logger::Builder::new()
        .filter_level(cli_args.log_level())
        .parse_default_env()
        .init();

    // 1. Check the commandline arguments
    let command = match raycast::handle_cli_args(cli_args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("CLI ERROR!");
            eprintln!("{}", err);
            std::process::exit(1);
        },
    };

    // 2. Run the requested command
    if let Err(err) = raycast::run_process(command) {
        eprintln!("PROCESS ERROR!");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
