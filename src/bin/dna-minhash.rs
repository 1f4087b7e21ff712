use clap::{load_yaml, App, ArgMatches};
use log::{error, LevelFilter};

use dna_minhash::cmd::{
    compute_minhash, decode_index, encode_shingle, list_shingles, MinHashReport, DEMO_KSIZE,
    DEMO_SEQUENCE,
};
use dna_minhash::{parse_ksize, Error};

fn ksize(cmd: &ArgMatches) -> Result<usize, Error> {
    match cmd.value_of("ksize") {
        Some(value) => parse_ksize(value),
        None => Err(Error::invalid_ksize("missing")),
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn print_report(report: &MinHashReport, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn run_minhash(cmd: &ArgMatches) -> CliResult {
    let sequence = cmd.value_of("sequence").unwrap_or(DEMO_SEQUENCE);
    let json = cmd.is_present("json");

    let seed = match cmd.value_of("seed") {
        Some(seed) => Some(seed.parse::<u64>().map_err(|_| Error::InvalidParameter {
            message: format!("seed ({}) should be a non-negative integer", seed),
        })?),
        None => None,
    };

    let report = match ksize(cmd) {
        Ok(k) => compute_minhash(sequence, k, seed),
        // an unparseable k is reported like any other validation failure
        Err(e) => {
            error!("{}", e);
            MinHashReport {
                sequence: sequence.into(),
                ksize: 0,
                minhash: None,
                error: Some(e.to_string()),
            }
        }
    };

    print_report(&report, json)?;
    Ok(())
}

fn run(m: &ArgMatches) -> CliResult {
    match m.subcommand() {
        ("minhash", Some(cmd)) => run_minhash(cmd),
        ("shingles", Some(cmd)) => {
            let out = list_shingles(cmd.value_of("sequence").unwrap_or_default(), ksize(cmd)?)?;
            println!("{}", out);
            Ok(())
        }
        ("encode", Some(cmd)) => {
            println!("{}", encode_shingle(cmd.value_of("shingle").unwrap_or_default())?);
            Ok(())
        }
        ("decode", Some(cmd)) => {
            let index = cmd.value_of("index").unwrap_or_default();
            println!("{}", decode_index(index, ksize(cmd)?)?);
            Ok(())
        }
        _ => {
            print_report(&compute_minhash(DEMO_SEQUENCE, DEMO_KSIZE, None), false)?;
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let yml = load_yaml!("dna-minhash.yml");
    let m = App::from_yaml(yml).get_matches();

    let quiet = m.is_present("quiet")
        || m.subcommand().1.map_or(false, |cmd| cmd.is_present("quiet"));
    if quiet {
        log::set_max_level(LevelFilter::Warn);
    }

    if let Err(e) = run(&m) {
        error!("{}", e);
        std::process::exit(1);
    }
}
