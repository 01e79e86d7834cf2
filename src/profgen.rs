use anyhow::Result;
use rlens::{generate_demo_profile, ProfileWriter};
use std::env;

struct Config {
    seed: u64,
    spans_per_track: usize,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 42,
            spans_per_track: 400,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-spans" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-spans requires an argument");
                }
                config.spans_per_track = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Lens Profile Generator");
    println!("Usage: lens-profgen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -spans <N>             Spans per track (default: 400)");
    println!("  -out <FILE>            Output file path (default: capture.lprof)");
    println!("  -brotli                Write compressed profile using Brotli (output: *.lprof.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "capture.lprof.br".to_string()
        } else {
            "capture.lprof".to_string()
        }
    });

    let data = generate_demo_profile(config.seed, config.spans_per_track);

    let mut writer = ProfileWriter::new(&output_path)?;
    writer.write_header(&data.metadata.version, data.metadata.header_data().clone())?;
    for track in &data.tracks {
        writer.write_track(track.id, &track.name)?;
    }
    for track in &data.tracks {
        for span in &track.spans {
            writer.write_span(track.id, span.start, span.end, &span.name, &span.category)?;
        }
    }
    writer.finish()?;

    println!(
        "Profile written to: {} ({} tracks, {} spans)",
        output_path,
        data.tracks.len(),
        data.span_count()
    );

    Ok(())
}
