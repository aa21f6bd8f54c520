use crate::commands::{execute, Context, Outcome, FAREWELL};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Splits a line into a lowercased command token and its arguments.
/// Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Reads commands from `input` until `close`/`exit` or end of input.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 still reach a command
/// handler and get a reply instead of ending the session.
pub fn run<R, W>(ctx: &mut Context<'_>, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{WELCOME}")?;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", ctx.config.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{FAREWELL}")?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        match execute(ctx, &command, &args) {
            Outcome::Reply(text) => writeln!(output, "{text}")?,
            Outcome::Exit(text) => {
                writeln!(output, "{text}")?;
                return Ok(());
            }
        }
    }
}
