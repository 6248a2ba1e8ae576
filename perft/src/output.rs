use std::{io::Write, time::Duration};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use perft_movegen::Move;

/// Nodes per second, saturating on very short runs.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
#[must_use]
pub fn nps(nodes: u64, time: Duration) -> u64 {
    (nodes as f64 / time.as_secs_f64()) as u64
}

/// Where counting results go.
///
/// `tick` is called from worker threads as root moves finish, in no particular
/// order; everything else is called from the driving thread in generation order.
pub trait Output: Sync {
    fn start(&mut self, root_moves: usize);
    fn tick(&self, m: Move, nodes: u64);
    fn root_move(&mut self, m: Move, nodes: u64) -> std::io::Result<()>;
    fn depth_complete(&mut self, depth: u32, nodes: u64, time: Duration) -> std::io::Result<()>;
    fn divide_complete(&mut self, nodes: u64, time: Duration) -> std::io::Result<()>;
}

pub struct Human {
    progress: ProgressBar,
}

impl Human {
    #[must_use]
    pub fn new() -> Self {
        Self { progress: ProgressBar::hidden() }
    }
}

impl Default for Human {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for Human {
    fn start(&mut self, root_moves: usize) {
        let progress = ProgressBar::new(root_moves as u64);
        if let Ok(style) = ProgressStyle::with_template("[{bar:40.magenta/red}] {msg:30!}") {
            progress.set_style(style.progress_chars("━╸ "));
        }
        self.progress = progress;
    }

    fn tick(&self, m: Move, nodes: u64) {
        self.progress.inc(1);
        self.progress.set_message(format!("{m} ({nodes} nodes)"));
    }

    fn root_move(&mut self, m: Move, nodes: u64) -> std::io::Result<()> {
        self.progress.println(format!("{} {nodes:>12}", m.to_string().bold()));
        Ok(())
    }

    fn depth_complete(&mut self, depth: u32, nodes: u64, time: Duration) -> std::io::Result<()> {
        self.progress.finish_and_clear();
        println!("{:>2} {nodes:>12} {:>8.3} {:>10} nps", depth.to_string().bold(), time.as_secs_f32(), nps(nodes, time));
        Ok(())
    }

    fn divide_complete(&mut self, nodes: u64, time: Duration) -> std::io::Result<()> {
        self.progress.finish_and_clear();
        println!();
        println!("{} {}", "Nodes searched:".green(), nodes.to_string().bold());
        println!("{:.3}s, {} nps", time.as_secs_f32(), nps(nodes, time));
        Ok(())
    }
}

/// `move: count` lines and a total, for diffing against other perft tools.
pub struct Plain<W> {
    out: W,
}

impl<W: Write> Plain<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Sync> Output for Plain<W> {
    fn start(&mut self, _root_moves: usize) {
        /* no-op */
    }

    fn tick(&self, _m: Move, _nodes: u64) {
        /* no-op */
    }

    fn root_move(&mut self, m: Move, nodes: u64) -> std::io::Result<()> {
        writeln!(self.out, "{m}: {nodes}")
    }

    fn depth_complete(&mut self, depth: u32, nodes: u64, _time: Duration) -> std::io::Result<()> {
        writeln!(self.out, "perft {depth}: {nodes}")
    }

    fn divide_complete(&mut self, nodes: u64, _time: Duration) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Nodes searched: {nodes}")
    }
}
