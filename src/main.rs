//! Viewer binary: loads options and optionally replays an input trace.

use std::path::Path;

use touchcam::{InputTrace, Options, Viewer};

const USAGE: &str = "Usage: touchcam [OPTIONS.toml] [--replay TRACE.toml]";

struct Args {
    options: Option<String>,
    replay: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        options: None,
        replay: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--replay" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--replay needs a trace path".to_owned())?;
                args.replay = Some(path);
            }
            "-h" | "--help" => return Err(USAGE.to_owned()),
            _ if args.options.is_none() && !arg.starts_with('-') => {
                args.options = Some(arg);
            }
            _ => return Err(format!("unexpected argument: {arg}\n{USAGE}")),
        }
    }
    Ok(args)
}

fn run(args: &Args) -> Result<(), touchcam::TouchcamError> {
    let options = match &args.options {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };

    if let Some(path) = &args.replay {
        let trace = InputTrace::load(Path::new(path))?;
        let _ = trace.run(&options);
        return Ok(());
    }

    Viewer::builder().with_options(options).build().run()
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            log::error!("{msg}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
