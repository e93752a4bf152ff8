//! Command tree for the `docseed` binary.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the full clap command tree.
pub fn build_cli() -> Command {
    Command::new("docseed")
        .about("Seed a document database from a TOML or JSON dataset")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every request (DEBUG)")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(upload_command())
        .subcommand(encode_command())
        .subcommand(check_command())
}

fn file_arg() -> Arg {
    Arg::new("file")
        .help("Seed file (.toml or .json)")
        .required(true)
}

fn collection_arg(help: &'static str) -> Arg {
    Arg::new("collection")
        .short('c')
        .long("collection")
        .value_name("NAME")
        .help(help)
        .action(ArgAction::Append)
}

fn upload_command() -> Command {
    Command::new("upload")
        .about("Write every document to the target store")
        .arg(file_arg())
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Documents root, overrides the file's target")
                .conflicts_with("project"),
        )
        .arg(
            Arg::new("project")
                .long("project")
                .value_name("ID")
                .help("Project id on the hosted document API"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .help("Write semantics")
                .value_parser(["upsert", "create"]),
        )
        .arg(collection_arg("Only upload this collection (repeatable)"))
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .help("Per-request timeout in seconds")
                .value_parser(value_parser!(u64).range(1..)),
        )
}

fn encode_command() -> Command {
    Command::new("encode")
        .about("Print encoded request bodies without sending them")
        .arg(file_arg())
        .arg(collection_arg("Only encode this collection (repeatable)"))
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Indent the JSON output")
                .action(ArgAction::SetTrue),
        )
}

fn check_command() -> Command {
    Command::new("check")
        .about("Load and validate a seed file")
        .arg(file_arg())
}
