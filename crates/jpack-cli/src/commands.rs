//! Subcommand handlers. Each returns the process exit code.

use crate::cli::{Cli, Command, IoArgs};
use crate::demo;
use anyhow::{bail, Context, Result};
use jpack_core::{format_bytes, is_encoded, Codec, CodecConfig, Encoded, TextReport};
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

pub const EXIT_NOT_ENCODED: i32 = 2;

pub fn run(cli: Cli) -> Result<i32> {
    let codec = load_codec(cli.config.as_deref())?;
    match cli.command {
        Command::Encode(args) => encode(&codec, &args),
        Command::Decode(args) => decode(&codec, &args),
        Command::Stats { input, json } => stats(&codec, input.as_deref(), json),
        Command::Check { input } => check(input.as_deref()),
        Command::Verify { input } => verify(&codec, input.as_deref()),
        Command::Demo { records } => demo::run(&codec, records),
    }
}

pub fn load_codec(path: Option<&Path>) -> Result<Codec> {
    let Some(path) = path else {
        return Ok(Codec::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = CodecConfig::from_json_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!(?config, "loaded codec config");
    Ok(Codec::with_config(config))
}

pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

pub fn parse_input(path: Option<&Path>) -> Result<Value> {
    let text = read_input(path)?;
    serde_json::from_str(&text).context("input is not valid JSON")
}

pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

pub fn write_output(path: Option<&Path>, value: &Value, pretty: bool) -> Result<()> {
    let text = render(value, pretty)?;
    match path {
        Some(p) => {
            std::fs::write(p, text + "\n").with_context(|| format!("writing {}", p.display()))?;
            info!(path = %p.display(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
    }
    Ok(())
}

fn encode(codec: &Codec, args: &IoArgs) -> Result<i32> {
    let records = parse_input(args.input.as_deref())?;
    let encoded = codec.encode_records(&records);
    if !encoded.is_packed() {
        info!("nothing to deduplicate, writing input unchanged");
    }
    write_output(args.output.as_deref(), &encoded.into_value(), args.pretty)?;
    Ok(0)
}

fn decode(codec: &Codec, args: &IoArgs) -> Result<i32> {
    let value = parse_input(args.input.as_deref())?;
    if !is_encoded(&value) {
        info!("input is not an encoded document, writing it unchanged");
    }
    write_output(args.output.as_deref(), &codec.decode(&value), args.pretty)?;
    Ok(0)
}

fn stats(codec: &Codec, input: Option<&Path>, json: bool) -> Result<i32> {
    let text = read_input(input)?;
    let report = TextReport::from_input(&text, codec)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(0)
}

pub fn format_report(report: &TextReport) -> String {
    let s = &report.stats;
    let saved_sign = if s.reduction > 0 { "-" } else { "+" };
    let mut out = String::new();
    out.push_str(&format!("{:<12} {:>12} {:>12} {:>12}\n", "Metric", "Original", "Encoded", "Saved"));
    out.push_str(&format!(
        "{:<12} {:>12} {:>12} {:>12}\n",
        "Size",
        format_bytes(s.original_size),
        format_bytes(s.compressed_size),
        format!("{saved_sign}{}%", s.compression_ratio.abs()),
    ));
    out.push_str(&format!(
        "{:<12} {:>12} {:>12} {:>12}\n",
        "Characters",
        s.original_size,
        s.compressed_size,
        format!("{saved_sign}{}", s.reduction.abs()),
    ));
    out.push_str(&format!(
        "{:<12} {:>12} {:>12}\n",
        "Lines", report.original_lines, report.formatted_lines
    ));
    out.push_str(&format!(
        "Encoded: {}\n",
        if report.encoded { "yes" } else { "no (passed through)" }
    ));
    out
}

fn check(input: Option<&Path>) -> Result<i32> {
    let value = parse_input(input)?;
    if is_encoded(&value) {
        println!("encoded");
        Ok(0)
    } else {
        println!("not encoded");
        Ok(EXIT_NOT_ENCODED)
    }
}

pub fn verify_records(codec: &Codec, records: &Value) -> Result<bool> {
    match codec.encode_records(records) {
        Encoded::Plain(_) => Ok(false),
        Encoded::Packed(packed) => {
            let refs = packed.schema.len();
            let decoded = codec.decode(&packed.into_value());
            if decoded != *records {
                bail!(
                    "round trip mismatch ({refs} references); an integer field may collide with a reference id"
                );
            }
            Ok(true)
        }
    }
}

fn verify(codec: &Codec, input: Option<&Path>) -> Result<i32> {
    let records = parse_input(input)?;
    if verify_records(codec, &records)? {
        println!("round trip ok");
    } else {
        println!("round trip ok (input passed through unchanged)");
    }
    Ok(0)
}
