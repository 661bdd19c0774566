use std::io::{self, BufRead, Write};

use colored::Colorize;
use miette::{Diagnostic, IntoDiagnostic};

use forge_shell::{ShellConfig, Theme, WidgetKind};

pub fn run(kind: WidgetKind, config: &ShellConfig) -> miette::Result<()> {
    let mut host = super::mount(kind, config);

    println!("{}", host.render()?);
    println!("  Type 'help' for commands, 'switch <widget>' to change widget, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}> ", host.current().unwrap_or("forge"));
        io::stdout().flush().into_diagnostic()?;

        line.clear();
        if reader.read_line(&mut line).into_diagnostic()? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let parts: Vec<&str> = input.splitn(2, ' ').collect();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");
        let result = match parts[0].to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "switch" => WidgetKind::parse(rest).map(|kind| host.mount_kind(kind, config)),
            "theme" => {
                match Theme::parse(rest) {
                    Some(theme) => host.theme().set(theme),
                    None => {
                        host.theme().toggle();
                    }
                }
                host.render()
            }
            "show" => host.render(),
            _ => host.handle(input),
        };

        match result {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{output}\n"),
            Err(e) => {
                println!("{}", e.to_string().yellow());
                if let Some(help) = e.help() {
                    println!("  help: {help}");
                }
                println!();
            }
        }
    }

    Ok(())
}
