//! Print a handful of product types to standard output.
//!
//! Run with `RUST_LOG=tuplefmt=trace` to see each top-level formatting call.

use std::io;
use tracing_subscriber::EnvFilter;
use tuplefmt::{
    format_to,
    sink::{Flags, Stream},
    tupled, Product, Sink,
};

#[derive(Debug, Product)]
struct Sample {
    sensor: &'static str,
    reading: f64,
    ok: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let samples = [
        Sample {
            sensor: "north",
            reading: 21.5,
            ok: true,
        },
        Sample {
            sensor: "south",
            reading: 19.0625,
            ok: false,
        },
    ];

    println!("{}", tupled(&(1, (2.5, 'a'), (true,))));
    println!("{:#.2}", tupled(&samples));

    let stdout = io::stdout();
    let mut out = Stream::new(stdout.lock()).with_flags(Flags::default().boolalpha(true));
    for sample in &samples {
        format_to(&mut out, sample)?.write_str("\n")?;
    }
    out.flush()
}
