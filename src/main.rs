use anyhow::Result;
use clap::Parser;
use svn_fast_export::areas::repository::Repository;
use svn_fast_export::artifacts::stream::sink::FastImportSink;

#[derive(Parser)]
#[command(
    name = "svn-fast-export",
    version = "0.1.0",
    about = "Export a Subversion repository as a git fast-import stream",
    long_about = "Walks every revision of a local Subversion repository and writes the \
    trunk file changes to standard output as a stream that git fast-import \
    can consume. Progress is reported on standard error.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        value_name = "REPOS_PATH",
        help = "The path to the Subversion repository"
    )]
    repos_path: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let sink = FastImportSink::new(std::io::stdout());
    let repository = Repository::open(
        &cli.repos_path,
        Box::new(sink),
        Box::new(std::io::stderr()),
    )?;

    repository.export()?;

    Ok(())
}
