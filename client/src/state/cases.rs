//! Case list model backing the dashboard.
//!
//! DESIGN
//! ======
//! Cases live only in memory. The visible list is derived from the full
//! collection on every render (filter, then sort) and never cached, so the
//! page can hand the raw collection to the view without keeping a second copy
//! in sync.
//!
//! ERROR HANDLING
//! ==============
//! Creation failures are reported through the injected `Notifier` and leave
//! the collection untouched.

#[cfg(test)]
#[path = "cases_test.rs"]
mod cases_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::date;

use super::notify::{Notice, Notifier};

pub const STATUS_NEW: &str = "New";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";
pub const UNSPECIFIED_TYPE: &str = "Unspecified";

/// A single investigation record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    pub created: Date,
    /// Open set; the site uses "New", "In Progress" and "Completed".
    pub status: String,
    /// Free-text category such as "Robbery".
    #[serde(rename = "type")]
    pub kind: String,
    pub last_updated: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    #[error("Please provide a title for the case.")]
    EmptyTitle,
}

impl CaseError {
    pub fn to_notice(&self) -> Notice {
        Notice::error("Error", self.to_string())
    }
}

/// Sortable case fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    Title,
    Date,
    #[default]
    LastUpdated,
    Type,
}

impl SortField {
    pub const ALL: [SortField; 4] = [SortField::Title, SortField::Date, SortField::LastUpdated, SortField::Type];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::Date => "Creation Date",
            SortField::LastUpdated => "Last Updated",
            SortField::Type => "Case Type",
        }
    }

    /// Ascending comparison on the raw field value.
    pub fn compare(self, a: &Case, b: &Case) -> Ordering {
        match self {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Date => a.created.cmp(&b.created),
            SortField::LastUpdated => a.last_updated.cmp(&b.last_updated),
            SortField::Type => a.kind.cmp(&b.kind),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Current sort selection. Starts at last-updated, newest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// Same field flips direction; a new field starts descending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }
}

/// Dashboard state: the case collection plus query, sort and create-dialog drafts.
#[derive(Clone, Debug)]
pub struct CasesState {
    pub cases: Vec<Case>,
    pub query: String,
    pub sort: SortState,
    pub create_open: bool,
    pub draft_title: String,
    pub draft_kind: String,
}

impl Default for CasesState {
    fn default() -> Self {
        Self::with_cases(seed_cases())
    }
}

impl CasesState {
    pub fn with_cases(cases: Vec<Case>) -> Self {
        Self {
            cases,
            query: String::new(),
            sort: SortState::default(),
            create_open: false,
            draft_title: String::new(),
            draft_kind: String::new(),
        }
    }

    /// Filtered and sorted view for the current query and sort.
    pub fn visible(&self) -> Vec<Case> {
        sort_cases(list_cases(&self.cases, &self.query), self.sort)
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    /// Create a case from the dialog drafts and put it at the head of the list.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::EmptyTitle`] when the draft title is blank; the
    /// collection, drafts and dialog are left as they were.
    pub fn create_case(&mut self, today: Date, notifier: &dyn Notifier) -> Result<Case, CaseError> {
        let case = match build_case(&self.draft_title, &self.draft_kind, self.cases.len(), today) {
            Ok(case) => case,
            Err(e) => {
                notifier.notify(e.to_notice());
                return Err(e);
            }
        };
        self.cases.insert(0, case.clone());
        self.draft_title.clear();
        self.draft_kind.clear();
        self.create_open = false;
        notifier.notify(Notice::success("Case Created", "Your new case has been created successfully."));
        Ok(case)
    }
}

/// Cases whose title or type contains `query`, ignoring case. An empty query
/// matches everything.
pub fn list_cases(cases: &[Case], query: &str) -> Vec<Case> {
    let needle = query.to_lowercase();
    cases
        .iter()
        .filter(|c| needle.is_empty() || c.title.to_lowercase().contains(&needle) || c.kind.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable sort by the selected field and direction.
pub fn sort_cases(mut cases: Vec<Case>, sort: SortState) -> Vec<Case> {
    cases.sort_by(|a, b| {
        let ord = sort.field.compare(a, b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    cases
}

/// Id for the next case given the current collection size.
pub fn next_case_id(count: usize) -> String {
    format!("case-{:03}", count + 1)
}

/// Build a fresh case record.
///
/// # Errors
///
/// Returns [`CaseError::EmptyTitle`] when `title` is empty or whitespace.
pub fn build_case(title: &str, kind: &str, count: usize, today: Date) -> Result<Case, CaseError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CaseError::EmptyTitle);
    }
    let kind = kind.trim();
    Ok(Case {
        id: next_case_id(count),
        title: title.to_owned(),
        created: today,
        status: STATUS_NEW.to_owned(),
        kind: if kind.is_empty() { UNSPECIFIED_TYPE.to_owned() } else { kind.to_owned() },
        last_updated: today,
    })
}

/// The three cases every session starts with.
pub fn seed_cases() -> Vec<Case> {
    vec![
        Case {
            id: "case-001".to_owned(),
            title: "Downtown Robbery Investigation".to_owned(),
            created: date!(2023 - 09 - 15),
            status: STATUS_IN_PROGRESS.to_owned(),
            kind: "Robbery".to_owned(),
            last_updated: date!(2023 - 09 - 20),
        },
        Case {
            id: "case-002".to_owned(),
            title: "Westside Home Invasion".to_owned(),
            created: date!(2023 - 08 - 22),
            status: STATUS_COMPLETED.to_owned(),
            kind: "Burglary".to_owned(),
            last_updated: date!(2023 - 09 - 01),
        },
        Case {
            id: "case-003".to_owned(),
            title: "River Park Homicide".to_owned(),
            created: date!(2023 - 07 - 30),
            status: STATUS_IN_PROGRESS.to_owned(),
            kind: "Homicide".to_owned(),
            last_updated: date!(2023 - 09 - 18),
        },
    ]
}
