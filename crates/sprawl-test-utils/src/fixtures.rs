//! Grid builders and reusable rule fixtures.
//!
//! - [`grid`] parses an ASCII picture into a [`LandGrid`].
//! - [`FillRule`] moves every cell of one category to another.
//! - [`RecordingRule`] captures each snapshot it is shown.
//! - [`CountingRule`] counts how often it runs, changing nothing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sprawl_core::{LandGrid, LandUse};
use sprawl_rule::{Rule, StepContext};

fn symbol(ch: char) -> Option<LandUse> {
    Some(match ch {
        '.' | '0' => LandUse::Empty,
        'l' | '1' => LandUse::ResidentialLow,
        'h' | '2' => LandUse::ResidentialHigh,
        'c' | '3' => LandUse::Commercial,
        'i' | '4' => LandUse::Industrial,
        'p' | '5' => LandUse::Park,
        'w' | '6' => LandUse::Water,
        'r' | '7' => LandUse::Road,
        _ => return None,
    })
}

fn glyph(category: LandUse) -> char {
    match category {
        LandUse::Empty => '.',
        LandUse::ResidentialLow => 'l',
        LandUse::ResidentialHigh => 'h',
        LandUse::Commercial => 'c',
        LandUse::Industrial => 'i',
        LandUse::Park => 'p',
        LandUse::Water => 'w',
        LandUse::Road => 'r',
    }
}

/// Build a grid from whitespace-separated cell symbols, one row per line.
///
/// `.` Empty, `l` Res-Low, `h` Res-High, `c` Commercial, `i` Industrial,
/// `p` Park, `w` Water, `r` Road; digits `0`-`7` also work. Blank lines
/// are ignored.
///
/// # Panics
///
/// On unknown symbols or ragged rows.
pub fn grid(picture: &str) -> LandGrid {
    let rows: Vec<Vec<LandUse>> = picture
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|tok| {
                    let mut chars = tok.chars();
                    match (chars.next().and_then(symbol), chars.next()) {
                        (Some(c), None) => c,
                        _ => panic!("unknown grid symbol {tok:?}"),
                    }
                })
                .collect()
        })
        .collect();
    LandGrid::from_rows(rows).unwrap_or_else(|e| panic!("bad grid picture: {e}"))
}

/// Render a grid in the format [`grid`] reads, for assertion messages.
pub fn render(g: &LandGrid) -> String {
    let mut out = String::new();
    for r in 0..g.rows() {
        let row: Vec<String> = (0..g.cols())
            .map(|c| glyph(g[(r, c)]).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// 5x5 grid with a single Road at the center.
pub fn lone_road() -> LandGrid {
    grid(
        "
        . . . . .
        . . . . .
        . . r . .
        . . . . .
        . . . . .
        ",
    )
}

/// 5x5 grid with a 3x3 Res-Low block at the center.
pub fn low_block() -> LandGrid {
    grid(
        "
        . . . . .
        . l l l .
        . l l l .
        . l l l .
        . . . . .
        ",
    )
}

/// A small mixed town with every category present.
pub fn small_town() -> LandGrid {
    grid(
        "
        w w . . p .
        w l l c r .
        . l h c r i
        . l l . r .
        p . c . r .
        ",
    )
}

/// Moves every `from` cell to `to`, unconditionally.
pub struct FillRule {
    pub name: String,
    pub from: LandUse,
    pub to: LandUse,
}

impl FillRule {
    pub fn new(name: impl Into<String>, from: LandUse, to: LandUse) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }
}

impl Rule for FillRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> LandUse {
        self.to
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let from = self.from;
        ctx.transition(|c| c == from, |_| true, self.to);
    }
}

/// Records a copy of every snapshot it sees.
///
/// The log is shared: keep the handle from [`RecordingRule::log`] before
/// boxing the rule into a composer.
pub struct RecordingRule {
    pub name: String,
    seen: Arc<Mutex<Vec<LandGrid>>>,
}

impl RecordingRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded snapshots.
    pub fn log(&self) -> Arc<Mutex<Vec<LandGrid>>> {
        Arc::clone(&self.seen)
    }
}

impl Rule for RecordingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> LandUse {
        LandUse::Empty
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        self.seen.lock().unwrap().push(ctx.snapshot().clone());
    }
}

/// Counts invocations and leaves the grid untouched.
pub struct CountingRule {
    pub name: String,
    calls: Arc<AtomicUsize>,
}

impl CountingRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Rule for CountingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> LandUse {
        LandUse::Empty
    }

    fn step(&self, _ctx: &mut StepContext<'_>) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_parses_row_major() {
        let g = grid(
            "
            . l
            w 7
            ",
        );
        assert_eq!(g.shape(), (2, 2));
        assert_eq!(g.to_codes(), vec![0, 1, 6, 7]);
    }

    #[test]
    fn render_reads_back() {
        let g = small_town();
        assert_eq!(grid(&render(&g)), g);
    }

    #[test]
    #[should_panic(expected = "unknown grid symbol")]
    fn unknown_symbol_panics() {
        grid("x");
    }

    #[test]
    fn fill_rule_moves_matching_cells() {
        let g = grid(". p p");
        let next = FillRule::new("fill", LandUse::Park, LandUse::Water).apply(&g);
        assert_eq!(next, grid(". w w"));
    }

    #[test]
    fn recording_rule_sees_input() {
        let rule = RecordingRule::new("rec");
        let log = rule.log();
        let g = low_block();
        rule.apply(&g);
        assert_eq!(log.lock().unwrap().as_slice(), &[g]);
    }

    #[test]
    fn counting_rule_counts() {
        let rule = CountingRule::new("count");
        let calls = rule.calls();
        rule.apply(&lone_road());
        rule.apply(&lone_road());
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }
}
