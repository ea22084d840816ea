use std::io::{BufRead, Write, stdin, stdout};

use clap::Parser;
use miette::{IntoDiagnostic, Report, Result};
use tracing_subscriber::EnvFilter;

use rollcall::{
    Config,
    shell::{Command, Reply, Shell},
};

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rollcall=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "starting rollcall");

    let mut shell = Shell::new(&config);
    if config.load {
        // An explicit --load that fails should stop the program
        if let Reply::Message(message) = shell.run(Command::Load(None))? {
            println!("{message}");
        }
    }

    println!("Student Management System. Type `help` for commands.");

    let mut buf = String::new();

    let mut stdin = stdin().lock();
    let mut stdout = stdout().lock();

    loop {
        stdout.write_all(b"rollcall> ").into_diagnostic()?;
        stdout.flush().into_diagnostic()?;

        buf.clear();
        let read = stdin.read_line(&mut buf).into_diagnostic()?;
        if read == 0 {
            // EOF
            stdout.write_all(b"\n").into_diagnostic()?;
            break;
        }

        match shell.execute(&buf) {
            Ok(Reply::Message(message)) => {
                stdout
                    .write_all(format!("{message}\n").as_bytes())
                    .into_diagnostic()?;
            }
            Ok(Reply::Nothing) => {}
            Ok(Reply::Exit) => break,
            Err(err) => {
                stdout
                    .write_all(format!("{:?}\n", Report::new(err)).as_bytes())
                    .into_diagnostic()?;
            }
        }
    }

    stdout.write_all(b"Exiting rollcall\n").into_diagnostic()?;
    stdout.flush().into_diagnostic()?;

    Ok(())
}
