use std::io;

use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use sonar_sweep::input::read_depths;
use sonar_sweep::scan::{count_increases, count_window_sum_increases};

fn main() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let depths = match read_depths(io::BufReader::new(io::stdin())) {
        Err(e) => {
            panic!("unusable depth report: {}", e);
        }
        Ok(depths) => depths,
    };
    event!(Level::DEBUG, "read {} depth measurements", depths.len());

    println!("depth increases: {}", count_increases(&depths));
    println!(
        "windowed depth increases: {}",
        count_window_sum_increases(&depths)
    );
}
