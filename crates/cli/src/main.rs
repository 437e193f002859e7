// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Command line interface for importing, reviewing and rendering
//! chord sheets.
//!
//! All inputs are read from a file or from stdin if the path is `-`.
//! Results are written to stdout.

use std::{
    fs,
    io::{self, Read as _, Write as _},
    path::{Path, PathBuf},
};

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use serde::Serialize;

use leadsheet_core::{
    music::key::Key,
    sheet::{DEFAULT_SECTION_TITLE, DEFAULT_SONG_KEY, DEFAULT_SONG_NAME, SongHeader},
};
use leadsheet_core_json as json;
use leadsheet_usecases::{
    classify::ChordLineThreshold,
    config::Config,
    ocr::{LazyOcrEngine, OcrEngine, recognize_section},
    render::{render_plain_text, render_song},
    sheet::{edit_section, finalize_song, import_text, parse_text},
};

mod settings;

const DEFAULT_LOG_FILTER: &str = "info";

const CONFIG_ARG: &str = "config";

const VERBOSE_ARG: &str = "verbose";

const INPUT_ARG: &str = "input";

const TITLE_ARG: &str = "title";

const KEY_ARG: &str = "key";

const AUTHOR_ARG: &str = "author";

const SECTION_NAME_ARG: &str = "section-name";

const PRELIMINARY_ARG: &str = "preliminary";

const JSON_ARG: &str = "json";

const STDIN_PATH: &str = "-";

/// Replays the recorded output of an external OCR engine.
///
/// The "image" is the JSON output that the engine produced.
#[derive(Debug)]
struct RecordedOcrEngine;

impl OcrEngine for RecordedOcrEngine {
    fn recognize(&self, image: &[u8]) -> anyhow::Result<leadsheet_core::layout::OcrOutput> {
        let output = serde_json::from_slice::<json::layout::OcrOutput>(image)?;
        Ok(output.into())
    }
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == STDIN_PATH {
        log::debug!("Reading input from stdin");
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(bytes);
    }
    log::debug!("Reading input from file: {}", path.display());
    fs::read(path).map_err(Into::into)
}

fn read_input_text(path: &Path) -> anyhow::Result<String> {
    String::from_utf8(read_input(path)?).map_err(Into::into)
}

fn read_input_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    serde_json::from_slice(&read_input(path)?).map_err(Into::into)
}

fn write_output(text: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}

fn write_output_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_output(&serde_json::to_string_pretty(value)?)
}

fn input_path(matches: &ArgMatches) -> &Path {
    matches
        .get_one::<PathBuf>(INPUT_ARG)
        .map_or_else(|| Path::new(STDIN_PATH), PathBuf::as_path)
}

fn string_arg<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map_or("", String::as_str)
}

fn song_header(matches: &ArgMatches) -> SongHeader {
    SongHeader {
        name: string_arg(matches, TITLE_ARG).to_owned(),
        key: string_arg(matches, KEY_ARG).to_owned(),
        authors: matches
            .get_many::<String>(AUTHOR_ARG)
            .unwrap_or_default()
            .cloned()
            .collect(),
    }
}

fn parse_text_command(matches: &ArgMatches, config: &Config) -> anyhow::Result<()> {
    let text = read_input_text(input_path(matches))?;
    if matches.get_flag(PRELIMINARY_ARG) {
        let sections = parse_text(&text, &config.classifier, ChordLineThreshold::Strict)
            .into_iter()
            .map(json::sheet::PreliminarySection::from)
            .collect::<Vec<_>>();
        return write_output_json(&sections);
    }
    let document = import_text(&text, song_header(matches), &config.classifier)?;
    write_output_json(&json::sheet::SongDocument::from(document))
}

fn edit_section_command(matches: &ArgMatches, config: &Config) -> anyhow::Result<()> {
    let json::api::EditSectionRequest {
        text,
        section_name,
        key,
    } = read_input_json(input_path(matches))?;
    let response = edit_section(&text, &section_name, &key, config)?;
    write_output_json(&json::api::SectionResponse::from(response))
}

fn structure_ocr_command(
    matches: &ArgMatches,
    config: &Config,
    engine: &impl OcrEngine,
) -> anyhow::Result<()> {
    let image = read_input(input_path(matches))?;
    let section_name = string_arg(matches, SECTION_NAME_ARG);
    let key = string_arg(matches, KEY_ARG);
    let response = recognize_section(engine, &image, section_name, key, config)?;
    write_output_json(&json::api::SectionResponse::from(response))
}

fn finalize_command(matches: &ArgMatches, config: &Config) -> anyhow::Result<()> {
    let request: json::api::FinalizeSongRequest = read_input_json(input_path(matches))?;
    let (header, sections) = request.into_parts();
    let document = finalize_song(header, &sections, &config.layout)?;
    write_output_json(&json::sheet::SongDocument::from(document))
}

fn render_command(matches: &ArgMatches) -> anyhow::Result<()> {
    let document: json::sheet::SongDocument = read_input_json(input_path(matches))?;
    let document = leadsheet_core::sheet::SongDocument::try_from(document)?;
    let key = matches.get_one::<String>(KEY_ARG).map(String::as_str);
    let rendered = render_song(&document, key)?;
    if matches.get_flag(JSON_ARG) {
        let sections = rendered
            .sections
            .into_iter()
            .map(json::sheet::SongSection::from)
            .collect::<Vec<_>>();
        return write_output_json(&sections);
    }
    write_output(&render_plain_text(&rendered.sections))
}

fn input_arg() -> Arg {
    Arg::new(INPUT_ARG)
        .help("The input file path or - for reading from stdin")
        .num_args(1)
        .value_parser(value_parser!(PathBuf))
        .default_value(STDIN_PATH)
}

fn key_arg() -> Arg {
    Arg::new(KEY_ARG)
        .long(KEY_ARG)
        .help("The key of the song, e.g. C, F# or Bbm")
        .num_args(1)
}

#[allow(clippy::too_many_lines)]
fn new_command() -> Command {
    Command::new("leadsheet")
        .about("Imports chord sheets and converts their chords into Nashville numbers")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg(
            Arg::new(CONFIG_ARG)
                .long(CONFIG_ARG)
                .help("The RON configuration file")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .short('v')
                .long(VERBOSE_ARG)
                .help("Increases the verbosity of log messages if RUST_LOG is not set")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("parse-text")
                .about("Imports a song from text with chord lines above lyric lines")
                .arg(input_arg())
                .arg(
                    Arg::new(TITLE_ARG)
                        .long(TITLE_ARG)
                        .help("The title of the song")
                        .num_args(1)
                        .default_value(DEFAULT_SONG_NAME),
                )
                .arg(key_arg().default_value(DEFAULT_SONG_KEY))
                .arg(
                    Arg::new(AUTHOR_ARG)
                        .long(AUTHOR_ARG)
                        .help("An author of the song")
                        .num_args(1)
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new(PRELIMINARY_ARG)
                        .long(PRELIMINARY_ARG)
                        .help("Only prints the classified lines without finalizing them")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("edit-section")
                .about("Reparses the text of a manually edited section from a JSON request")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("structure-ocr")
                .about("Structures the recorded JSON output of an OCR engine")
                .arg(input_arg())
                .arg(
                    Arg::new(SECTION_NAME_ARG)
                        .long(SECTION_NAME_ARG)
                        .help("The name of the recognized section")
                        .num_args(1)
                        .default_value(DEFAULT_SECTION_TITLE),
                )
                .arg(key_arg().default_value(DEFAULT_SONG_KEY)),
        )
        .subcommand(
            Command::new("finalize")
                .about("Finalizes a song from reviewed sections in a JSON request")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Renders a finalized song with chord symbols")
                .arg(input_arg())
                .arg(key_arg().help("The key for rendering chords instead of the key of the song"))
                .arg(
                    Arg::new(JSON_ARG)
                        .long(JSON_ARG)
                        .help("Prints the sections as JSON instead of plain text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("keys").about("Lists all supported keys"))
        .subcommand(Command::new("print-config").about("Prints the effective configuration"))
}

fn main() -> anyhow::Result<()> {
    let matches = new_command().get_matches();

    let log_filter = match matches.get_count(VERBOSE_ARG) {
        0 => DEFAULT_LOG_FILTER,
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter)).init();

    let config = matches
        .get_one::<PathBuf>(CONFIG_ARG)
        .map(|file_path| settings::load_or_default(file_path))
        .unwrap_or_default();
    log::debug!("{config:?}");

    let ocr_engine = LazyOcrEngine::new(|| {
        log::debug!("Using recorded OCR engine output");
        Ok(RecordedOcrEngine)
    });

    match matches.subcommand() {
        Some(("parse-text", matches)) => parse_text_command(matches, &config),
        Some(("edit-section", matches)) => edit_section_command(matches, &config),
        Some(("structure-ocr", matches)) => structure_ocr_command(matches, &config, &ocr_engine),
        Some(("finalize", matches)) => finalize_command(matches, &config),
        Some(("render", matches)) => render_command(matches),
        Some(("keys", _)) => write_output(&Key::available_keys().join("\n")),
        Some(("print-config", _)) => write_output(&settings::to_pretty_string(&config)?),
        Some((subcommand, _)) => {
            unreachable!("Unknown subcommand {subcommand}");
        }
        None => {
            unreachable!("Missing subcommand");
        }
    }
}
