//! Plain-text rendering of step views.

use std::io::{self, Write};

use crate::application::{BatteryView, IntroView, ResultsView, StepView, TieBreakerView};
use crate::domain::classification::{Archetype, MarkerPosition};
use crate::domain::foundation::{Part, Rating};

const CHART_WIDTH: usize = 41;
const CHART_HEIGHT: usize = 13;

/// Writes the full screen for a view.
pub fn render<W: Write>(out: &mut W, view: &StepView) -> io::Result<()> {
    writeln!(out)?;
    match view {
        StepView::Intro(intro) => render_intro(out, intro),
        StepView::Battery(battery) => render_battery(out, battery),
        StepView::TieBreaker(tie) => render_tie_breaker(out, tie),
        StepView::Results(results) => render_results(out, results),
    }
}

fn render_intro<W: Write>(out: &mut W, view: &IntroView) -> io::Result<()> {
    writeln!(out, "THE LIT COMPASS")?;
    writeln!(out, "Where do you stand as a reader of literature?")?;
    writeln!(out)?;
    writeln!(
        out,
        "Part A rates {} statements about insight, Part B rates {} about mechanics.",
        view.insight_questions, view.mechanics_questions
    )?;
    writeln!(out, "One last question settles borderline scores.")?;
    writeln!(out)?;
    writeln!(out, "[b] begin   [q] quit")
}

fn render_battery<W: Write>(out: &mut W, view: &BatteryView) -> io::Result<()> {
    let section = match view.part {
        Part::Insight => "Section 1 of 2: The Insight Scale",
        Part::Mechanics => "Section 2 of 2: The Mechanics Scale",
    };
    writeln!(out, "{} ({}/{} answered)", section, view.answered, view.total())?;
    writeln!(
        out,
        "Rate each statement from {} (disagree) to {} (agree).",
        Rating::MIN,
        Rating::MAX
    )?;
    writeln!(out)?;

    for question in &view.questions {
        let mark = question
            .rating
            .map(|r| r.value().to_string())
            .unwrap_or_else(|| " ".to_string());
        writeln!(out, "  {}. [{}] {}", question.id, mark, question.text)?;
    }
    writeln!(out)?;

    let mut controls = vec!["<question> <1-5> rate".to_string()];
    if view.can_go_back {
        controls.push("[p] back".to_string());
    }
    if view.can_advance {
        controls.push("[n] next".to_string());
    } else {
        controls.push("[n] next (answer every statement first)".to_string());
    }
    controls.push("[r] restart".to_string());
    controls.push("[q] quit".to_string());
    writeln!(out, "{}", controls.join("   "))
}

fn render_tie_breaker<W: Write>(out: &mut W, view: &TieBreakerView) -> io::Result<()> {
    writeln!(out, "Final question")?;
    writeln!(
        out,
        "Which of these comments about your reading sounds most familiar?"
    )?;
    writeln!(out)?;
    for option in &view.options {
        writeln!(out, "  [{}] {}", option.id, option.text)?;
    }
    writeln!(out)?;
    if view.can_go_back {
        writeln!(out, "<option> choose   [p] back   [r] restart   [q] quit")
    } else {
        writeln!(out, "<option> choose   [r] restart   [q] quit")
    }
}

fn render_results<W: Write>(out: &mut W, view: &ResultsView) -> io::Result<()> {
    writeln!(out, "Your result: {}", view.result)?;
    writeln!(out, "{}", view.result_profile.tagline)?;
    writeln!(
        out,
        "Insight {} / Mechanics {} (threshold {})",
        view.totals.insight, view.totals.mechanics, view.threshold
    )?;
    writeln!(out, "Completed in {}s", view.elapsed_secs)?;
    writeln!(out)?;
    for line in chart_lines(view.marker) {
        writeln!(out, "  {}", line)?;
    }
    writeln!(out)?;

    let profile = &view.viewed;
    if view.is_browsing() {
        writeln!(out, "Viewing {} (not your result)", profile.name)?;
    }
    writeln!(out, "{}", profile.result_title)?;
    writeln!(out, "\"{}\"", profile.result_quote)?;
    writeln!(out)?;
    writeln!(out, "Diagnosis: {}", profile.diagnosis)?;
    writeln!(out, "Prescription: {}", profile.prescription)?;
    write_list(out, "Strengths", &profile.strengths)?;
    write_list(out, "Weaknesses", &profile.weaknesses)?;
    writeln!(out, "Approach: {}", profile.approach)?;
    writeln!(out)?;

    for tile in &view.quadrants {
        let mut tags = Vec::new();
        if tile.is_result {
            tags.push("you");
        }
        if tile.is_viewed {
            tags.push("viewing");
        }
        let suffix = if tags.is_empty() {
            String::new()
        } else {
            format!(" <{}>", tags.join(", "))
        };
        writeln!(
            out,
            "  [{}] {}: {}{}",
            tile.archetype.id(),
            tile.name,
            tile.tagline,
            suffix
        )?;
    }
    writeln!(out)?;
    writeln!(out, "<1-4> view quadrant   [r] retake   [q] quit")
}

fn write_list<W: Write>(out: &mut W, title: &str, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}:", title)?;
    for item in items {
        writeln!(out, "  - {}", item)?;
    }
    Ok(())
}

/// ASCII quadrant grid with quadrant ids in the corners and `@` at the marker.
///
/// Insight runs bottom to top, mechanics left to right.
fn chart_lines(marker: MarkerPosition) -> Vec<String> {
    let mid_col = CHART_WIDTH / 2;
    let mid_row = CHART_HEIGHT / 2;
    let mut grid = vec![vec![' '; CHART_WIDTH]; CHART_HEIGHT];

    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = match (r == mid_row, c == mid_col) {
                (true, true) => '+',
                (true, false) => '-',
                (false, true) => '|',
                (false, false) => ' ',
            };
        }
    }

    let corners = [
        (0, 1, Archetype::Philosopher),
        (0, CHART_WIDTH - 2, Archetype::Captain),
        (CHART_HEIGHT - 1, 1, Archetype::Explorer),
        (CHART_HEIGHT - 1, CHART_WIDTH - 2, Archetype::Architect),
    ];
    for (r, c, archetype) in corners {
        grid[r][c] = char::from(b'0' + archetype.id());
    }

    let col = scale(marker.x, CHART_WIDTH);
    let row = CHART_HEIGHT - 1 - scale(marker.y, CHART_HEIGHT);
    grid[row][col] = '@';

    let mut lines = vec![format!("{:^width$}", "high insight", width = CHART_WIDTH)];
    lines.extend(grid.into_iter().map(|row| row.into_iter().collect::<String>()));
    lines.push(format!(
        "{:<half$}{:>half$}",
        "low mechanics",
        "high mechanics",
        half = CHART_WIDTH / 2
    ));
    lines
}

/// Maps a 0-100 percentage onto cell indices `0..cells`.
fn scale(percent: f64, cells: usize) -> usize {
    let span = (cells - 1) as f64;
    let index = (percent.clamp(0.0, 100.0) / 100.0 * span).round() as usize;
    index.min(cells - 1)
}
