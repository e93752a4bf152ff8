//! ArgMatches → CliAction conversion.

use std::path::PathBuf;

use clap::ArgMatches;
use docseed::{TargetConfig, WriteMode};
use tracing::Level;

/// What the user asked for.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Write documents to the store.
    Upload {
        file: PathBuf,
        overrides: TargetOverrides,
        collections: Vec<String>,
    },
    /// Print encoded documents.
    Encode {
        file: PathBuf,
        collections: Vec<String>,
        pretty: bool,
    },
    /// Validate and summarize a seed file.
    Check { file: PathBuf },
}

/// Command-line settings that replace the seed file's `[target]` values.
#[derive(Debug, Default, PartialEq)]
pub struct TargetOverrides {
    pub base_url: Option<String>,
    pub project: Option<String>,
    pub mode: Option<WriteMode>,
    pub timeout_secs: Option<u64>,
}

impl TargetOverrides {
    /// Layer the overrides on top of a file target.
    pub fn apply(&self, mut target: TargetConfig) -> TargetConfig {
        if let Some(url) = &self.base_url {
            target = target.with_base_url(url.clone());
        }
        if let Some(project) = &self.project {
            target = target.with_project_id(project.clone());
        }
        if let Some(mode) = self.mode {
            target = target.with_write_mode(mode);
        }
        if let Some(secs) = self.timeout_secs {
            target = target.with_timeout_secs(secs);
        }
        target
    }
}

/// Log level from the global `-v` / `-q` flags.
pub fn log_level(matches: &ArgMatches) -> Level {
    if matches.get_flag("verbose") {
        Level::DEBUG
    } else if matches.get_flag("quiet") {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "upload" => {
            let mode = m
                .get_one::<String>("mode")
                .map(|s| s.parse::<WriteMode>())
                .transpose()?;
            Ok(CliAction::Upload {
                file: file(m)?,
                overrides: TargetOverrides {
                    base_url: m.get_one::<String>("base-url").cloned(),
                    project: m.get_one::<String>("project").cloned(),
                    mode,
                    timeout_secs: m.get_one::<u64>("timeout").copied(),
                },
                collections: collections(m),
            })
        }
        "encode" => Ok(CliAction::Encode {
            file: file(m)?,
            collections: collections(m),
            pretty: m.get_flag("pretty"),
        }),
        "check" => Ok(CliAction::Check { file: file(m)? }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn file(m: &ArgMatches) -> Result<PathBuf, String> {
    m.get_one::<String>("file")
        .map(PathBuf::from)
        .ok_or_else(|| "Missing seed file".to_string())
}

fn collections(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("collection")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
