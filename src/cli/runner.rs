use tracing::info;
use tracing_subscriber::EnvFilter;

use fs_stc::{load_job, log_install_root, plan_job, run_gear};

use super::args::CliArgs;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> fs_stc::Result<()> {
    init_logging(args.verbose);

    let settings = args.settings();
    log_install_root(settings.install_root());

    if args.dry_run {
        let job = load_job(&settings)?;
        let plan = plan_job(&job, &settings)?;
        println!("{plan}");
        return Ok(());
    }

    let report = run_gear(&settings)?;
    info!(
        "Successfully processed: {:?} -> {:?}",
        report.produced, report.relocated
    );
    if let Some(env_copy) = &report.environment_copy {
        info!("Environment saved to {:?}", env_copy);
    }
    Ok(())
}
