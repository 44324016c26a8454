use clap::Parser;
use site_asset_migrate::Rewrite;
use site_asset_migrate::cli::{self, MigrateArgs};

/// Convert buildGeneralImageUrl('project_sites/...') calls to buildProjectSiteUrl('...')
#[derive(Parser, Debug)]
#[command(name = "convert-project-sites", version)]
struct Cli {
    #[command(flatten)]
    args: MigrateArgs,
}

fn main() -> anyhow::Result<()> {
    let opts = Cli::parse();
    cli::run(Rewrite::general_to_project_site_call, &opts.args)
}
