//! docseed CLI: seed a document database from a TOML or JSON dataset.
//!
//! - `docseed upload FILE`: write every document, exit 1 if any write failed
//! - `docseed encode FILE`: print request bodies, no network traffic
//! - `docseed check FILE`: validate and summarize

mod commands;
mod parse;

use std::path::Path;
use std::process;

use docseed::{Seeder, SeedFile};
use tracing::Level;

use commands::build_cli;
use parse::{log_level, matches_to_action, CliAction, TargetOverrides};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(log_level(&matches));

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let exit_code = match run(action) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(action: CliAction) -> docseed::Result<i32> {
    match action {
        CliAction::Upload {
            file,
            overrides,
            collections,
        } => run_upload(&file, &overrides, &collections),
        CliAction::Encode {
            file,
            collections,
            pretty,
        } => run_encode(&file, &collections, pretty),
        CliAction::Check { file } => run_check(&file),
    }
}

fn run_upload(file: &Path, overrides: &TargetOverrides, collections: &[String]) -> docseed::Result<i32> {
    let seed = SeedFile::from_path(file)?;
    let target = overrides.apply(seed.target.clone());
    let seeder = Seeder::builder().target(&target)?.build()?;

    let report = seeder.seed_only(&seed, collections)?;
    for failure in report.failures() {
        if let Some(e) = &failure.error {
            eprintln!("(error) {}/{}: {}", failure.collection, failure.doc_id, e);
        }
    }
    println!("{}", report.summary());

    Ok(if report.is_success() { 0 } else { 1 })
}

fn run_encode(file: &Path, collections: &[String], pretty: bool) -> docseed::Result<i32> {
    let seed = SeedFile::from_path(file)?;
    for collection in seed.select(collections)? {
        let rendered = if pretty {
            Seeder::render_pretty(collection)?
        } else {
            Seeder::render(collection)?
        };
        for (doc_id, body) in rendered {
            println!("{}/{}", collection.name(), doc_id);
            println!("{}", body);
        }
    }
    Ok(0)
}

fn run_check(file: &Path) -> docseed::Result<i32> {
    let seed = SeedFile::from_path(file)?;
    for collection in seed.collections() {
        println!("{}: {} documents", collection.name(), collection.len());
    }
    println!(
        "{} collections, {} documents",
        seed.collections().len(),
        seed.document_count()
    );

    match seed.target.endpoint() {
        Ok(endpoint) => println!("target: {} ({})", endpoint, seed.target.write_mode),
        Err(e) => println!("target: not configured ({})", e),
    }
    Ok(0)
}
