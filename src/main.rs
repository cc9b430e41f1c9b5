fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Delegate to CLI runner; errors are printed nicely here.
    if let Err(err) = dirtree::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
