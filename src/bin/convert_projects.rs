use clap::Parser;
use site_asset_migrate::Rewrite;
use site_asset_migrate::cli::{self, MigrateArgs};

/// Convert /images/project_sites/ paths to buildGeneralImageUrl() calls
#[derive(Parser, Debug)]
#[command(name = "convert-projects", version)]
struct Cli {
    #[command(flatten)]
    args: MigrateArgs,
}

fn main() -> anyhow::Result<()> {
    let opts = Cli::parse();
    cli::run(Rewrite::path_to_general_call, &opts.args)
}
