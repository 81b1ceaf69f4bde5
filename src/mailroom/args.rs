use clap::Parser;

/// Mailroom takes no positional arguments or subcommands: everything
/// happens through the interactive menu. Clap still gives us `--help`,
/// `--version`, and a usage error with a non-zero exit for anything
/// unexpected on the command line.
#[derive(Parser, Debug)]
#[command(name = "mailroom")]
#[command(about = "Interactive donation tracker: record donations, send thank-yous, print reports", long_about = None)]
pub struct Cli {}
