//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles its empty case with a one-line message.

use std::fmt;

use crate::models::{Idea, Niche, PlaybookEntry, PlaybookStatus, Template};

/// Newtype wrapper for displaying generated ideas as compact cards.
///
/// # Examples
///
/// ```rust
/// use skill2niche_core::display::Ideas;
///
/// assert_eq!(Ideas(vec![]).to_string(), "No ideas generated yet.\n");
/// ```
pub struct Ideas(pub Vec<Idea>);

impl Ideas {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Idea> {
        self.0.iter()
    }
}

impl fmt::Display for Ideas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No ideas generated yet.");
        }
        for idea in &self.0 {
            idea.fmt_card(f)?;
        }
        Ok(())
    }
}

/// The niche catalog with the current selection marked.
pub struct NicheCatalog {
    pub niches: Vec<Niche>,
    pub selected: Vec<Niche>,
}

impl NicheCatalog {
    pub fn new(niches: Vec<Niche>, selected: Vec<Niche>) -> Self {
        Self { niches, selected }
    }

    fn is_selected(&self, niche: &Niche) -> bool {
        self.selected.iter().any(|s| s.id == niche.id)
    }
}

impl fmt::Display for NicheCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Niches ({}/{} selected)",
            self.selected.len(),
            crate::catalog::MAX_SELECTED_NICHES
        )?;
        writeln!(f)?;
        for niche in &self.niches {
            let mark = if self.is_selected(niche) { "x" } else { " " };
            writeln!(f, "- [{mark}] {niche}")?;
        }
        Ok(())
    }
}

/// Playbook entries grouped into status columns in board order.
///
/// # Examples
///
/// ```rust
/// use skill2niche_core::{display::PlaybookBoard, models::PlaybookStatus};
///
/// let board = PlaybookBoard::new(vec![]);
/// assert_eq!(board.total(), 0);
/// assert!(board.column(PlaybookStatus::Live).is_empty());
/// ```
pub struct PlaybookBoard {
    columns: Vec<(PlaybookStatus, Vec<PlaybookEntry>)>,
}

impl PlaybookBoard {
    /// Groups entries by status, keeping their relative order.
    pub fn new(entries: Vec<PlaybookEntry>) -> Self {
        let mut columns: Vec<(PlaybookStatus, Vec<PlaybookEntry>)> = PlaybookStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        for entry in entries {
            if let Some((_, column)) = columns.iter_mut().find(|(s, _)| *s == entry.status) {
                column.push(entry);
            }
        }
        Self { columns }
    }

    pub fn column(&self, status: PlaybookStatus) -> &[PlaybookEntry] {
        self.columns
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    pub fn columns(&self) -> impl Iterator<Item = (PlaybookStatus, &[PlaybookEntry])> {
        self.columns
            .iter()
            .map(|(status, entries)| (*status, entries.as_slice()))
    }

    /// Number of entries across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|(_, entries)| entries.len()).sum()
    }
}

impl fmt::Display for PlaybookBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total() == 0 {
            return writeln!(f, "Your playbook is empty. Save an idea to start tracking it.");
        }
        for (status, entries) in self.columns() {
            writeln!(f, "## {} ({})", status.with_icon(), entries.len())?;
            writeln!(f)?;
            for entry in entries {
                write!(f, "{entry}")?;
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying workflow templates.
pub struct Templates(pub Vec<&'static Template>);

impl fmt::Display for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates available.");
        }
        for template in &self.0 {
            write!(f, "{template}")?;
        }
        Ok(())
    }
}
