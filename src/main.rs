// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dashgroups CLI entrypoint.
//!
//! A thin admin front end over the engine: list group names, show the layout order, and add,
//! rename, or delete groups across `services.yaml`, `bookmarks.yaml` and `settings.yaml`.

use std::error::Error;
use std::path::PathBuf;

use dashgroups::{
    EngineConfig, FailurePolicy, LayoutEntry, LayoutFormat, SagaReport, Workspace,
    WriteDurability,
};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "DASHGROUPS_CONFIG_DIR";
const LOG_ENV: &str = "DASHGROUPS_LOG";
const DEFAULT_CONFIG_DIR: &str = "./config";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [options] groups\n  {program} [options] layout\n  {program} [options] add <name>\n  {program} [options] rename <old> <new>\n  {program} [options] delete <name>\n\nOptions:\n  --config-dir <dir>          config directory (else ${CONFIG_DIR_ENV}, else {DEFAULT_CONFIG_DIR})\n  --engine-config <file>      YAML engine config (document names, durability, formats)\n  --durable-writes            fsync documents and their directory after each write\n  --layout-format <format>    `mapping` (default) or `sequence` for the settings layout\n  --strict                    fail the command when a services/bookmarks step fails\n  --json                      print results as JSON\n\nLog verbosity follows ${LOG_ENV} (default `info`); logs go to stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Groups,
    Layout,
    Add { name: String },
    Rename { old_name: String, new_name: String },
    Delete { name: String },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config_dir: Option<String>,
    engine_config: Option<String>,
    durable_writes: bool,
    layout_format: Option<LayoutFormat>,
    strict: bool,
    json: bool,
    command: Option<Command>,
}

fn parse_command(name: &str, args: &mut impl Iterator<Item = String>) -> Result<Command, ()> {
    match name {
        "groups" => Ok(Command::Groups),
        "layout" => Ok(Command::Layout),
        "add" => Ok(Command::Add {
            name: args.next().ok_or(())?,
        }),
        "rename" => Ok(Command::Rename {
            old_name: args.next().ok_or(())?,
            new_name: args.next().ok_or(())?,
        }),
        "delete" => Ok(Command::Delete {
            name: args.next().ok_or(())?,
        }),
        _ => Err(()),
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config-dir" => {
                if options.config_dir.is_some() {
                    return Err(());
                }
                options.config_dir = Some(args.next().ok_or(())?);
            }
            "--engine-config" => {
                if options.engine_config.is_some() {
                    return Err(());
                }
                options.engine_config = Some(args.next().ok_or(())?);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--layout-format" => {
                if options.layout_format.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.layout_format = Some(raw.parse()?);
            }
            "--strict" => {
                if options.strict {
                    return Err(());
                }
                options.strict = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.command.is_some() {
                    return Err(());
                }
                options.command = Some(parse_command(&arg, &mut args)?);
            }
        }
    }

    if options.command.is_none() {
        return Err(());
    }

    Ok(options)
}

fn resolve_config(options: &CliOptions) -> Result<EngineConfig, Box<dyn Error>> {
    let mut config = match &options.engine_config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read engine config {path:?}: {err}"))?;
            EngineConfig::from_yaml_str(&text)
                .map_err(|err| format!("invalid engine config {path:?}: {err}"))?
        }
        None => {
            let dir = std::env::var_os(CONFIG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
            EngineConfig::new(dir)
        }
    };

    if let Some(dir) = &options.config_dir {
        config.config_dir = PathBuf::from(dir);
    }
    if options.durable_writes {
        config = config.with_durability(WriteDurability::Durable);
    }
    if let Some(layout_format) = options.layout_format {
        config = config.with_layout_format(layout_format);
    }
    if options.strict {
        config = config.with_failure_policy(FailurePolicy::Strict);
    }
    Ok(config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_report(report: &SagaReport, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    match report {
        SagaReport::Rename(report) => {
            println!(
                "renamed {:?} -> {:?} at position {}",
                report.old_name, report.new_name, report.position
            );
        }
        SagaReport::Delete(report) => {
            println!(
                "deleted {:?} from position {} ({} service(s), {} bookmark(s) moved)",
                report.group,
                report.position,
                report.services_items_moved,
                report.bookmarks_items_moved
            );
        }
    }
    for step in report.failed_steps() {
        println!("  step failed: {step}");
    }
    Ok(())
}

async fn run(command: Command, workspace: &Workspace, json: bool) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Groups => {
            let names = workspace.unified_group_names().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
        Command::Layout => {
            let layout = workspace
                .read_settings()
                .await?
                .map(|settings| settings.layout().to_vec())
                .unwrap_or_default();
            if json {
                let records = layout.iter().map(LayoutEntry::to_record).collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for (index, entry) in layout.iter().enumerate() {
                    println!("{index}\t{}", entry.name());
                }
            }
        }
        Command::Add { name } => {
            let position = workspace.add_group(LayoutEntry::new(name.as_str())).await?;
            if json {
                println!("{}", serde_json::json!({ "group": name, "position": position }));
            } else {
                println!("added {name:?} at position {position}");
            }
        }
        Command::Rename { old_name, new_name } => {
            let report = workspace.rename_group(&old_name, &new_name).await?;
            print_report(&SagaReport::Rename(report), json)?;
        }
        Command::Delete { name } => {
            let report = workspace.delete_group(&name).await?;
            print_report(&SagaReport::Delete(report), json)?;
        }
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "dashgroups".to_owned());

        let mut options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let config = resolve_config(&options)?;
        tracing::debug!(config_dir = %config.config_dir.display(), "using config directory");
        let workspace = Workspace::new(config)?;

        let Some(command) = options.command.take() else {
            print_usage(&program);
            std::process::exit(2);
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run(command, &workspace, options.json))
    })();

    if let Err(err) = result {
        eprintln!("dashgroups: {err}");
        std::process::exit(1);
    }
}
