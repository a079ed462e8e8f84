use colorhub::logging::ColorLogger;
use colorhub::prelude::*;
use log::LevelFilter;

const HELP_TEXT: &str = "\
colorhub: convert a color between hex, float RGB, integer RGB and HSV

USAGE:
    colorhub [OPTIONS] VALUE...

OPTIONS:
    --from <KIND>         Input representation: hex (default), rgb, int, hsv
    --byte-width <N>      Bytes per integer channel (only 1 is supported)
    -v, --verbose         Log conversion details to stderr
    -h, --help            Print this help

VALUES:
    hex   one value, e.g. '#80ff00' or 80ff00
    rgb   three floats in 0.0..=1.0
    int   three integers
    hsv   three floats in 0.0..=1.0 (hue is a fraction of 360 degrees)

ENVIRONMENT:
    COLORHUB_LOG          Log level (off, error, warn, info, debug, trace)
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Hex,
    Rgb,
    Int,
    Hsv,
}

impl InputKind {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "int" => Ok(Self::Int),
            "hsv" => Ok(Self::Hsv),
            _ => Err(format!(
                "Unknown --from value `{raw}` (expected hex, rgb, int or hsv)."
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Input {
    Hex(String),
    Rgb(f64, f64, f64),
    Int(u32, u32, u32),
    Hsv(f64, f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
struct Config {
    help: bool,
    verbose: bool,
    byte_width: u8,
    input: Option<Input>,
}

impl Config {
    const fn with_defaults() -> Self {
        Self {
            help: false,
            verbose: false,
            byte_width: 1,
            input: None,
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return;
    }

    let mut logger = ColorLogger::from_env().show_time(false);
    if cfg.verbose && logger.level_filter() < LevelFilter::Debug {
        logger = logger.level(LevelFilter::Debug);
    }
    // Only fails if a logger is already installed.
    let _ = logger.init();

    let Some(input) = cfg.input.as_ref() else {
        eprintln!("Missing VALUE.\n\n{HELP_TEXT}");
        std::process::exit(2);
    };

    match convert(input, cfg.byte_width) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn convert(input: &Input, byte_width: u8) -> Result<Vec<String>, ColorError> {
    let width = ByteWidth::new(byte_width)?;
    let rgb = match input {
        Input::Hex(hex) => RgbFloat::from_hex(hex)?,
        Input::Rgb(r, g, b) => RgbFloat::new(*r, *g, *b),
        Input::Int(r, g, b) => RgbInt::with_width(*r, *g, *b, width).to_rgb(),
        Input::Hsv(h, s, v) => Hsv::new(*h, *s, *v).to_rgb(),
    };
    log::debug!("hub value for {input:?}: {rgb:?}");

    Ok(vec![
        format!("hex  {}", rgb.hex()),
        format!("rgb  {rgb}"),
        format!("int  {}", rgb.to_rgb_int(width)),
        format!("hsv  {}", rgb.to_hsv()),
    ])
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::with_defaults();
    let mut kind = InputKind::Hex;
    let mut values = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "-v" | "--verbose" => cfg.verbose = true,
            "--from" => {
                let raw = next_value(&mut iter, "--from")?;
                kind = InputKind::parse(&raw)?;
            }
            "--byte-width" => {
                let raw = next_value(&mut iter, "--byte-width")?;
                cfg.byte_width = raw.parse::<u8>().map_err(|_| {
                    format!("Invalid --byte-width value `{raw}` (expected an integer 0-255).")
                })?;
            }
            // Negative numbers are values, not flags.
            flag if flag.starts_with('-') && flag.parse::<f64>().is_err() => {
                return Err(format!("Unknown argument `{flag}`. Try --help."));
            }
            value => values.push(value.to_string()),
        }
    }

    if cfg.help || values.is_empty() {
        return Ok(cfg);
    }

    cfg.input = Some(parse_input(kind, &values)?);
    Ok(cfg)
}

fn parse_input(kind: InputKind, values: &[String]) -> Result<Input, String> {
    match kind {
        InputKind::Hex => match values {
            [hex] => Ok(Input::Hex(hex.clone())),
            _ => Err(format!("Expected 1 hex value, got {}.", values.len())),
        },
        InputKind::Rgb => {
            let [r, g, b] = parse_triple::<f64>(values)?;
            Ok(Input::Rgb(r, g, b))
        }
        InputKind::Int => {
            let [r, g, b] = parse_triple::<u32>(values)?;
            Ok(Input::Int(r, g, b))
        }
        InputKind::Hsv => {
            let [h, s, v] = parse_triple::<f64>(values)?;
            Ok(Input::Hsv(h, s, v))
        }
    }
}

fn parse_triple<T: std::str::FromStr + Copy + Default>(values: &[String]) -> Result<[T; 3], String> {
    if values.len() != 3 {
        return Err(format!("Expected 3 values, got {}.", values.len()));
    }
    let mut out = [T::default(); 3];
    for (slot, raw) in out.iter_mut().zip(values) {
        *slot = raw
            .parse::<T>()
            .map_err(|_| format!("Invalid component `{raw}`."))?;
    }
    Ok(out)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}
