use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use doc_so::persistence::load_config;
use doc_so::{NumberReader, ReadingConfig};
use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    doc_so::init_logging();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config = match take_config_arg(&mut args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };
    let reader = match NumberReader::new(config) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.is_empty() {
        return match interactive(&reader) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut status = ExitCode::SUCCESS;
    for literal in &args {
        match reader.read(literal) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

/// Pulls `--config <path>` out of the argument list.
fn take_config_arg(args: &mut Vec<String>) -> Result<ReadingConfig, String> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(ReadingConfig::default());
    };
    if pos + 1 >= args.len() {
        return Err("--config needs a path".to_string());
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    load_config(Path::new(&path)).map_err(|e| format!("{}: {}", path, e))
}

fn interactive(reader: &NumberReader) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Đọc số (number reader)".bold());
    println!("---------------------------------------------------------------");
    println!("Type a number such as 1,250,000.5 and press [Enter]. 'exit' to quit.\n");

    loop {
        print!("> ");
        out.flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "exit" => break,
            "" => continue,
            literal => match reader.read(literal) {
                Ok(text) => println!("{}", text.green()),
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
    }
    Ok(())
}
