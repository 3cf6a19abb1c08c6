use anyhow::Result;
use clap::Parser;
use geotopn::Opts;
use geotopn::cli::SubCommandExtend;
use geotopn::config::SubCommand;
use log::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    debug!("{:?}", opts);

    match &opts.subcmd {
        SubCommand::File(config) => config.run(&opts).await,
        SubCommand::Db(config) => config.run(&opts).await,
    }
}
