//! CLI presenter for zones, dossiers and poll results.

use std::io::{self, Write};

use warroom_core::intel::{assessment, intel_for};
use warroom_core::{format_number, ConflictZone, Poll, Tone};

use crate::output::{percent_bar, truncate};
use crate::ui::paint;

const NAME_WIDTH: usize = 24;
const LOCATION_WIDTH: usize = 18;
const BAR_WIDTH: usize = 20;

/// Writes dashboard records as plain terminal text.
pub struct CliPresenter {
    color: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }

    /// One row per zone; ids only when quiet.
    pub fn present_zones(&self, out: &mut dyn Write, zones: &[ConflictZone]) -> io::Result<()> {
        if self.quiet {
            for zone in zones {
                writeln!(out, "{}", zone.id)?;
            }
            return Ok(());
        }

        writeln!(
            out,
            "  {:<20} {:<NAME_WIDTH$} {:<LOCATION_WIDTH$} {:<9} {:<13}",
            "ID", "NAME", "LOCATION", "SEVERITY", "STATUS"
        )?;
        writeln!(out, "{:-<90}", "")?;
        for zone in zones {
            // Pad before painting so escapes do not count toward the width.
            let severity = format!("{:<9}", zone.severity.label().to_uppercase());
            let status = format!("{:<13}", zone.status.label().to_uppercase());
            writeln!(
                out,
                "  {:<20} {:<NAME_WIDTH$} {:<LOCATION_WIDTH$} {} {}",
                zone.id,
                truncate(&zone.name, NAME_WIDTH),
                truncate(&zone.location, LOCATION_WIDTH),
                paint(&severity, zone.severity.tone(), self.color),
                paint(&status, zone.status.tone(), self.color),
            )?;
        }
        writeln!(out, "\n{} zones", zones.len())
    }

    /// The same content as the dashboard's detail dialog.
    pub fn present_dossier(&self, out: &mut dyn Write, zone: &ConflictZone) -> io::Result<()> {
        writeln!(out, "{}", paint(&format!("⚠ {}", zone.name), Tone::Red, self.color))?;
        writeln!(out, "{:=<60}", "")?;
        writeln!(out, "LOCATION:    {}", zone.location)?;
        writeln!(
            out,
            "STATUS:      {}",
            paint(&zone.status.label().to_uppercase(), zone.status.tone(), self.color)
        )?;
        writeln!(
            out,
            "THREAT:      {}",
            paint(&zone.severity.label().to_uppercase(), zone.severity.tone(), self.color)
        )?;
        writeln!(out, "UPDATED:     {}", zone.last_update)?;
        writeln!(out, "CASUALTIES:  {}", zone.casualties)?;

        if self.quiet {
            return Ok(());
        }

        writeln!(out, "\nKEY DEVELOPMENTS")?;
        for item in &zone.key_developments {
            writeln!(out, "  • {item}")?;
        }
        writeln!(out, "\nINVOLVED PARTIES")?;
        writeln!(out, "  {}", zone.involved_parties.join(" · "))?;
        writeln!(out, "\nINTELLIGENCE")?;
        for line in intel_for(&zone.id) {
            writeln!(out, "  > {line}")?;
        }
        writeln!(out, "\n{}", paint(&assessment(zone), Tone::Cyan, self.color))
    }

    /// Question, then each option with its share of the static tally.
    pub fn present_poll(&self, out: &mut dyn Write, poll: &Poll) -> io::Result<()> {
        let total = poll.total_votes();
        writeln!(out, "{}", poll.question)?;
        writeln!(out, "{} RESPONSES", format_number(total))?;
        writeln!(out, "{:-<60}", "")?;
        for (option, percent) in poll.breakdown() {
            if self.quiet {
                writeln!(out, "{}\t{}\t{percent}", option.id, option.votes)?;
                continue;
            }
            writeln!(
                out,
                "  {} {:<28} {} {:>3}% ({})",
                option.flag,
                truncate(&option.text, 28),
                paint(&percent_bar(percent, BAR_WIDTH), Tone::Green, self.color),
                percent,
                format_number(option.votes),
            )?;
        }
        Ok(())
    }
}
