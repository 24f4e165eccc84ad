use std::process::ExitCode;

use clap::ArgMatches;
use colored::Colorize;
use human_panic::setup_panic;
use log::{error, info, warn};

use pathname_assistant::config::{load_config, read_or_create};
use pathname_assistant::prelude::*;
use pathname_assistant::utils::system_name;
use pathname_assistant::{
    get_config_path, get_export_kind, get_format, get_locations, get_log_file, get_matches,
    get_removals, get_verbosity,
};

fn main() -> ExitCode {
    setup_panic!();

    if is_clipboard_keeper() {
        return match keep_clipboard_text() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let matches = get_matches();
    setup_logging(&matches);

    match try_main(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(matches: &ArgMatches) {
    let verbosity = get_verbosity(matches);
    let log_file = get_log_file(matches).unwrap_or_default();

    if let Err(e) = init_logger(verbosity, &log_file) {
        // Fall back to console output only
        if init_logger(verbosity, "").is_ok() {
            warn!("Cannot write log file {log_file}: {e}");
        } else {
            eprintln!("Failed to initialise logging: {e}");
        }
    }
}

fn try_main(matches: &ArgMatches) -> anyhow::Result<()> {
    if matches.get_flag("list_formats") {
        return list_formats(matches);
    }

    let options = RunOptions {
        config_path: get_config_path(matches),
        entries: get_locations(matches),
        paste: matches.get_flag("paste"),
        format: get_format(matches),
        export: get_export_kind(matches),
        sort: matches.get_flag("sort"),
        removals: get_removals(matches),
        to_stdout: matches.get_flag("stdout"),
        save_preferences: matches.get_flag("save_preferences"),
    };

    let mut clipboard: Box<dyn TextClipboard> = if options.paste || !options.to_stdout {
        Box::new(system_clipboard()?)
    } else {
        Box::new(MemoryClipboard::default())
    };

    let outcome = run(&options, clipboard.as_mut())?;

    match outcome.text {
        Some(text) if !outcome.copied => println!("{text}"),
        Some(_) => info!(
            "Copied {} of {} locations ({})",
            outcome.config.export,
            outcome.session.locations().len(),
            outcome.config.format
        ),
        None => warn!("No locations given; nothing was copied"),
    }

    Ok(())
}

fn system_clipboard() -> anyhow::Result<SystemClipboard> {
    let clipboard = SystemClipboard::new()?;
    match std::env::current_exe() {
        Ok(program) => Ok(clipboard.with_keeper(program)),
        Err(e) => {
            warn!("Cannot locate pnassist to keep the clipboard: {e}");
            Ok(clipboard)
        }
    }
}

fn list_formats(matches: &ArgMatches) -> anyhow::Result<()> {
    let config_path = read_or_create(get_config_path(matches))?;
    let preferred = get_format(matches).unwrap_or(load_config(&config_path)?.format);

    for format in Format::ALL {
        let line = format!(
            "{:<8} {}",
            format.key(),
            format.label_with_os(Some(system_name()))
        );
        if format == preferred {
            let plain = format!("{line} *");
            println!("{}", format_message(&plain, &plain.bold().to_string()));
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
