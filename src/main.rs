use std::io;

use invsqrt_error::driver;
use invsqrt_error::options::Options;
use invsqrt_error::Error;

fn main() -> anyhow::Result<()> {
    let e = env_logger::Env::new()
        .filter_or("INVSQRT_LOG", "warn")
        .write_style("INVSQRT_LOG_STYLE");
    env_logger::init_from_env(e);

    let options = match Options::parse_from(std::env::args_os()) {
        Ok(options) => options,
        // --help and --version end up here too
        Err(Error::Args(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };
    log::debug!("options: {:?}", options);

    let stdout = io::stdout();
    let curves = driver::run(&options, &mut stdout.lock())?;
    log::info!("plotted {} curves", curves.len());
    Ok(())
}
