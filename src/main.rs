use anyhow::Result;
use clap::Parser;
use swap_params::{cli::Args, config, quote, report, utils};

fn main() -> Result<()> {
    let env_file = config::load_env();
    utils::init_logging();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "[INIT] loaded .env");
    }

    let args = Args::parse();
    tracing::debug!(?args, "[INIT] arguments parsed");

    let request = args.to_request()?;
    let now = utils::unix_now();
    let result = quote::build_quote(&request, now)?;

    // Render fully before writing so a failure leaves stdout empty
    let output = if args.json {
        report::json_report(&result)? + "\n"
    } else {
        report::text_report(&result, args.amount_in.is_some())?
    };
    print!("{output}");
    Ok(())
}
