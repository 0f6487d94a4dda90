//! Simple command that prints one or '-n count' UUID strings of the given version

use std::{env, io, io::Write, process::ExitCode};

use uuidkit::{GenerateError, Uuid};

fn main() -> io::Result<ExitCode> {
    let mut args = env::args();
    let program = args.next();
    let program = program.as_deref().unwrap_or("uuidkit");

    let (generate, count) = match parse_args(args) {
        Ok(Some((version, count))) => (version, count.unwrap_or(1)),
        Ok(None) => {
            println!("nothing to generate; only accept `v1`, `v4` or `v7` as the first argument");
            return Ok(ExitCode::SUCCESS);
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} v1|v4|v7 [-n count]", program);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..count {
        match generate() {
            Ok(uuid) => writeln!(buf, "{}", uuid)?,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

type Version = fn() -> Result<Uuid, GenerateError>;

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<Option<(Version, Option<usize>)>, String> {
    let version: Version = match args.next().as_deref() {
        Some("v1") => uuidkit::uuid1,
        Some("v4") => uuidkit::uuid4,
        Some("v7") => uuidkit::uuid7,
        _ => return Ok(None),
    };

    let mut count = None;
    while let Some(arg) = args.next() {
        if arg != "-n" {
            return Err(format!("unrecognized argument '{}'", arg));
        }
        if count.is_some() {
            return Err("option 'n' given more than once".to_owned());
        }
        let Some(n_arg) = args.next() else {
            return Err("argument to option 'n' missing".to_owned());
        };
        let Ok(c) = n_arg.parse() else {
            return Err(format!("invalid argument to option 'n': '{}'", n_arg));
        };
        count.replace(c);
    }
    Ok(Some((version, count)))
}
