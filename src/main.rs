mod codegen;
mod defaults;
mod fmt;
mod generate;
mod models;
mod syntax;

use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use log::{debug, error, info};
use structopt::StructOpt;

use crate::codegen::MockOptions;
use crate::generate::{generate_with, interface_model};

#[derive(StructOpt)]
#[structopt(about = "Generate function-field mocks for Go interfaces")]
struct Opt {
    /// File holding the interface declaration, stdin if omitted
    #[structopt(short, long, parse(from_os_str))]
    input_file: Option<PathBuf>,

    /// Where to write the result, stdout if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Prepended to the interface name to name the mock
    #[structopt(long, default_value = "Mock")]
    prefix: String,

    /// Receiver name of the generated methods
    #[structopt(long, default_value = "o")]
    receiver: String,

    /// Run the result through gofmt
    #[structopt(long)]
    gofmt: bool,

    /// Print the parsed interface as JSON instead of generating code
    #[structopt(long)]
    dump_model: bool,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{}=INFO", env!("CARGO_PKG_NAME")));
    }
    env_logger::init();

    let opts: Opt = Opt::from_args();
    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(opts) {
        error!("{:#}", e);
        exit(1);
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    debug!("Reading input");
    let raw = read_input(opts.input_file.as_ref())?;

    let text = if opts.dump_model {
        let iface = interface_model(&raw)?;
        let mut json = serde_json::to_string_pretty(&iface).context("Failed to serialize model")?;
        json.push('\n');
        json
    } else {
        let mock_opts = MockOptions {
            prefix: opts.prefix,
            receiver: opts.receiver,
        };
        let mut out = Vec::new();
        generate_with(&raw, &mut out, &mock_opts)?;
        let generated = String::from_utf8(out)?;

        if opts.gofmt {
            debug!("Running gofmt");
            fmt::gofmt(generated)?
        } else {
            generated
        }
    };

    match opts.output {
        Some(path) => {
            debug!("Writing {:?}", path);
            let f = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut w = BufWriter::new(f);
            w.write_all(text.as_bytes())?;
            w.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open input file {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}
