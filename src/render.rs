use std::io::{self, Write};

use crate::{rank::RankedEntry, scheduler::Renderer};

const TITLE: &str = "Top Hosts";
const RULE_WIDTH: usize = 43;

/// Plain-text report writer.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "Reading from stdin, ^C to abort...")?;
        writeln!(
            self.out,
            "[ Top IPs will be cumulative for the life of this run. ]"
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, entries: &[RankedEntry], _limit: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{:^width$}", TITLE, width = RULE_WIDTH)?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        for entry in entries {
            writeln!(self.out, "{:>30}: {:>6} hits", entry.key, entry.count)?;
        }
        self.out.flush()
    }
}
