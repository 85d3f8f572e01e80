use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;

use chlib::real;
use chlib::Matrix;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CHLIB_LOG", "error,chlib=info"))
        .init();

    let matches = Command::new("chlib")
        .version(clap::crate_version!())
        .about("Diagnostics for the chlib dense-matrix library")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("real").about("Report the configured real-number precision"))
        .subcommand(
            Command::new("eye")
                .about("Print an identity matrix")
                .arg(
                    Arg::new("order")
                        .help("Order of the identity matrix")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("real", _)) => report_real(),
        Some(("eye", sub)) => print_eye(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn report_real() -> Result<()> {
    println!("Real is {}", real::PRECISION);
    println!("Size of real: {}", real::size_of_real());
    println!("Size of f32: {}", std::mem::size_of::<f32>());
    println!("Size of f64: {}", std::mem::size_of::<f64>());
    Ok(())
}

fn print_eye(matches: &ArgMatches) -> Result<()> {
    let n = *matches
        .get_one::<usize>("order")
        .expect("order has a default value");
    log::debug!("rendering {}x{} identity", n, n);
    let eye = Matrix::eye(n)?;
    println!("{}", eye);
    Ok(())
}
