use anyhow::Context;
use todo_heap::cli::{Args, CommandRunner, CommandStatus, ConfigDiscovery};
use todo_heap::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let run_config = match args.run_config() {
        Ok(run_config) => run_config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let config = match ConfigDiscovery::load(run_config.config_override.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let default_filter = if run_config.verbose {
        env::VERBOSE_LOG_FILTER
    } else {
        config.log_filter.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let runner = CommandRunner::new(
        config,
        run_config.file_override.as_deref(),
        run_config.verbose,
    );
    info!("Using task file {:?}", runner.task_file());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = runner
        .execute(&run_config.mode, &mut out)
        .with_context(|| format!("{:?} failed", run_config.mode));
    drop(out);

    match result {
        Ok(CommandStatus::Done) => {}
        Ok(CommandStatus::ListEmpty) => {
            eprintln!("Your to-do list is empty!");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
