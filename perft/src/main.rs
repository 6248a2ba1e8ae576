use colored::Colorize;
use perft::{
    output::{Human, Output, Plain},
    Config, DriverError,
};
use perft_movegen::Board;

fn count<O: Output>(config: &Config, board: &Board, output: &mut O) -> Result<u64, DriverError> {
    if config.divide {
        perft::divide(board, config.depth, output)
    } else {
        perft::iterate(board, config.depth, output)
    }
}

fn main() -> Result<(), DriverError> {
    let config = Config::from_args(std::env::args().skip(1))?;

    tracing_subscriber::fmt().with_max_level(config.log_level()).with_writer(std::io::stderr).init();
    tracing::debug!(?config, "starting");

    let mut board = Board::from_fen(&config.fen)?;

    if let Some(walks) = config.soak {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "soak seed");
        let stats = perft::soak(&mut board, walks, seed)?;
        println!(
            "{} {} walks, {} moves made and taken back (seed {seed})",
            "ok".green().bold(),
            stats.walks,
            stats.makes
        );
        return Ok(());
    }

    if !config.plain {
        print!("{board}");
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(config.threads).build()?;
    pool.install(|| {
        if config.plain {
            count(&config, &board, &mut Plain::new(std::io::stdout()))
        } else {
            count(&config, &board, &mut Human::new())
        }
    })?;

    Ok(())
}
