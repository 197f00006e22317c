// src/bin/cli.rs
use awstatic::cli::{self, Command};
use color_eyre::eyre::WrapErr;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1))? {
        Command::Version => println!("awstatic {}", cli::VERSION),
        Command::Help => eprintln!("{}", include_str!("../cli_help.txt")),
        Command::Run { config_file } => {
            cli::run(&config_file)
                .wrap_err("An unexpected error occurred. Program aborted.")?;
        }
    }
    Ok(())
}
