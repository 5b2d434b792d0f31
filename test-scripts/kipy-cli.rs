use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use kipy::proto::common::ApiStatusCode;
use kipy::{BoardItem, ClientBuilder, DocumentType, KiCad, KiCadError};

#[derive(Debug)]
struct CliConfig {
    socket: Option<String>,
    token: Option<String>,
    timeout_ms: u64,
}

#[derive(Debug)]
enum Command {
    Ping,
    Version,
    OpenDocs { document_type: DocumentType },
    Stackup,
    GraphicsDefaults,
    Nets { netclasses: Vec<String> },
    Selection,
    TextVars,
    TitleBlock,
    Smoke,
    Help,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(
                err,
                KiCadError::BoardNotOpen | KiCadError::SocketUnavailable { .. }
            ) {
                eprintln!(
                    "hint: launch KiCad, open a project, and open a PCB editor window before rerunning this command."
                );
            }
            if let KiCadError::ApiStatus { code, message, .. } = &err {
                if *code == ApiStatusCode::AsUnhandled {
                    eprintln!(
                        "hint: this KiCad build reported the command as unavailable (`{message}`). try `ping` and `version`, or update KiCad/API settings."
                    );
                }
            }
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), KiCadError> {
    let (config, command) = parse_args()?;

    if matches!(command, Command::Help) {
        print_help();
        return Ok(());
    }

    let mut builder = ClientBuilder::new().timeout(Duration::from_millis(config.timeout_ms));
    if let Some(socket) = config.socket {
        builder = builder.socket_path(socket);
    }
    if let Some(token) = config.token {
        builder = builder.token(token);
    }

    let kicad = KiCad::from_client(builder.connect()?);

    match command {
        Command::Ping => {
            kicad.ping()?;
            println!("pong");
        }
        Command::Version => {
            let version = kicad.get_version()?;
            println!("version: {version}");
        }
        Command::OpenDocs { document_type } => {
            let docs = kicad.get_open_documents(document_type)?;
            if docs.is_empty() {
                println!("no open `{document_type}` documents");
            } else {
                for (idx, doc) in docs.iter().enumerate() {
                    let board = doc.board_filename.as_deref().unwrap_or("-");
                    let project_name = doc.project.name.as_deref().unwrap_or("-");
                    let project_path = doc
                        .project
                        .path
                        .as_ref()
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| "-".to_string());

                    println!(
                        "[{idx}] type={} board={} project_name={} project_path={}",
                        doc.document_type, board, project_name, project_path
                    );
                }
            }
        }
        Command::Stackup => {
            let stackup = kicad.get_board()?.get_stackup()?;
            println!(
                "finish={} impedance_controlled={} thickness_mm={}",
                stackup.finish_type_name(),
                stackup.impedance_controlled(),
                kipy::units::to_mm(stackup.thickness())
            );
            for (idx, layer) in stackup.layers().enumerate() {
                println!(
                    "[{idx}] type={} layer={} enabled={} thickness_nm={} material={}",
                    layer.layer_type().as_str_name(),
                    layer.layer().as_str_name(),
                    layer.enabled(),
                    layer.thickness(),
                    layer.material_name()
                );
            }
        }
        Command::GraphicsDefaults => {
            let defaults = kicad.get_board()?.get_graphics_defaults()?;
            for (class, entry) in &defaults {
                let text_size = entry
                    .text_attributes()
                    .map(|attributes| attributes.size().to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "class={} line_thickness_nm={} text_size_nm={}",
                    class.as_str_name(),
                    entry.line_thickness(),
                    text_size
                );
            }
        }
        Command::Nets { netclasses } => {
            let filter: Vec<&str> = netclasses.iter().map(String::as_str).collect();
            let nets = kicad.get_board()?.get_nets(&filter)?;
            if nets.is_empty() {
                println!("no nets returned");
            } else {
                for net in nets {
                    println!("code={} name={}", net.code(), net.name());
                }
            }
        }
        Command::Selection => {
            let items = kicad.get_board()?.get_selection()?;
            println!("selection_total={}", items.len());
            for (index, item) in items.iter().enumerate() {
                println!(
                    "[{index}] type={} id={} {}",
                    item.type_name(),
                    item.id().unwrap_or("-"),
                    describe(item)
                );
            }
        }
        Command::TextVars => {
            let board = kicad.get_board()?;
            let project = kicad.get_project(board.document());
            let variables = project.get_text_variables()?;
            let mut entries: Vec<(&str, &str)> = variables.iter().collect();
            entries.sort_unstable();
            if entries.is_empty() {
                println!("no text variables");
            }
            for (name, value) in entries {
                println!("{name}={value}");
            }
        }
        Command::TitleBlock => {
            let info = kicad.get_board()?.get_title_block_info()?;
            println!("title={}", info.title());
            println!("date={}", info.date());
            println!("revision={}", info.revision());
            println!("company={}", info.company());
            for (index, comment) in info.comments().iter().enumerate() {
                if !comment.is_empty() {
                    println!("comment{}={comment}", index + 1);
                }
            }
        }
        Command::Smoke => {
            kicad.ping()?;
            let version = kicad.get_version()?;
            let boards = kicad.get_open_documents(DocumentType::Pcb)?;
            println!(
                "smoke ok: version={}.{}.{} board_open={}",
                version.major,
                version.minor,
                version.patch,
                !boards.is_empty()
            );
        }
        Command::Help => print_help(),
    }

    Ok(())
}

fn describe(item: &BoardItem) -> String {
    match item {
        BoardItem::Track(track) => format!(
            "layer={} start={} end={} width_nm={}",
            track.layer().as_str_name(),
            track.start(),
            track.end(),
            track.width()
        ),
        BoardItem::Via(via) => format!("position={}", via.position()),
        BoardItem::Footprint(footprint) => format!(
            "reference={} position={}",
            footprint.reference(),
            footprint.position()
        ),
        BoardItem::Pad(pad) => format!("number={} position={}", pad.number(), pad.position()),
        BoardItem::Text(text) => format!("text={:?}", text.value()),
        BoardItem::Zone(zone) => format!("name={:?} layers={}", zone.name(), zone.layers().len()),
        other => format!("raw_len={}", other.pack().value.len()),
    }
}

fn parse_args() -> Result<(CliConfig, Command), KiCadError> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        return Ok((default_config(), Command::Help));
    }

    let mut config = default_config();
    let mut index = 0;

    while index < args.len() {
        match args[index].as_str() {
            "--socket" => {
                let value = args.get(index + 1).ok_or_else(|| KiCadError::Config {
                    reason: "missing value for --socket".to_string(),
                })?;
                config.socket = Some(value.clone());
                args.drain(index..=index + 1);
            }
            "--token" => {
                let value = args.get(index + 1).ok_or_else(|| KiCadError::Config {
                    reason: "missing value for --token".to_string(),
                })?;
                config.token = Some(value.clone());
                args.drain(index..=index + 1);
            }
            "--timeout-ms" => {
                let value = args.get(index + 1).ok_or_else(|| KiCadError::Config {
                    reason: "missing value for --timeout-ms".to_string(),
                })?;
                config.timeout_ms = value.parse::<u64>().map_err(|err| KiCadError::Config {
                    reason: format!("invalid --timeout-ms value `{value}`: {err}"),
                })?;
                args.drain(index..=index + 1);
            }
            _ => {
                index += 1;
            }
        }
    }

    if args.is_empty() {
        return Ok((config, Command::Help));
    }

    let command = match args[0].as_str() {
        "help" | "--help" | "-h" => Command::Help,
        "ping" => Command::Ping,
        "version" => Command::Version,
        "stackup" => Command::Stackup,
        "graphics-defaults" => Command::GraphicsDefaults,
        "selection" => Command::Selection,
        "text-vars" => Command::TextVars,
        "title-block" => Command::TitleBlock,
        "smoke" => Command::Smoke,
        "nets" => {
            let mut netclasses = Vec::new();
            let mut i = 1;
            while i < args.len() {
                if args[i] == "--class" {
                    let value = args.get(i + 1).ok_or_else(|| KiCadError::Config {
                        reason: "missing value for nets --class".to_string(),
                    })?;
                    netclasses.push(value.clone());
                    i += 2;
                    continue;
                }
                i += 1;
            }
            Command::Nets { netclasses }
        }
        "open-docs" => {
            let mut document_type = DocumentType::Pcb;
            let mut i = 1;
            while i < args.len() {
                if args[i] == "--type" {
                    let value = args.get(i + 1).ok_or_else(|| KiCadError::Config {
                        reason: "missing value for open-docs --type".to_string(),
                    })?;
                    document_type = DocumentType::from_str(value)
                        .map_err(|err| KiCadError::Config { reason: err })?;
                    i += 2;
                    continue;
                }
                i += 1;
            }
            Command::OpenDocs { document_type }
        }
        other => {
            return Err(KiCadError::Config {
                reason: format!("unknown command `{other}`"),
            });
        }
    };

    Ok((config, command))
}

fn default_config() -> CliConfig {
    CliConfig {
        socket: None,
        token: None,
        timeout_ms: 3_000,
    }
}

fn print_help() {
    println!(
        "kipy-cli\n\nUSAGE:\n  cargo run --bin kipy-cli -- [--socket URI] [--token TOKEN] [--timeout-ms N] <command> [command options]\n\nCOMMANDS:\n  ping                         Check IPC connectivity\n  version                      Fetch KiCad version\n  open-docs [--type <type>]    List open docs (default type: pcb)\n  stackup                      Show the board layer stackup\n  graphics-defaults            Show default line/text settings per layer class\n  nets [--class <name>]...     List board nets, optionally by net class\n  selection                    Show decoded items in the current selection\n  text-vars                    List project text variables\n  title-block                  Show the board title block\n  smoke                        ping + version + board-open summary\n  help                         Show help\n\nTYPES:\n  schematic | symbol | pcb | footprint | drawing-sheet | project\n"
    );
}
