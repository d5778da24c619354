use anyhow::Result;
use clap::{Arg, Command};
use log::LevelFilter;

use array_primer::tour;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("PRIMER_LOG", "error,array_primer=info"))
        .init();

    let matches = Command::new("array-primer")
        .version(clap::crate_version!())
        .about("Annotated walkthrough of n-dimensional array operations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tour")
                .about("Print the walkthrough, whole or one section at a time")
                .arg(
                    Arg::new("section")
                        .short('s')
                        .long("section")
                        .help("Restrict the walkthrough to a single section")
                        .value_parser(tour::SECTION_NAMES),
                ),
        )
        .subcommand(Command::new("sections").about("List walkthrough sections in order"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tour", tour_matches)) => {
            let section = tour_matches.get_one::<String>("section");
            match tour::run(section.map(String::as_str)) {
                Ok(()) => Ok(()),
                Err(e) => {
                    log::error!("Walkthrough failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        Some(("sections", _)) => {
            for name in tour::SECTION_NAMES {
                println!("{}", name);
            }
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}
