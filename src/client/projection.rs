use crate::core::models::nurse::Nurse;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    LicenseNumber,
    Dob,
    Age,
    CreatedAt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Selecting the active field flips the direction, any other field starts ascending.
    pub fn select(self, field: SortField) -> Self {
        if self.field == field {
            SortState {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            SortState {
                field,
                direction: SortDirection::Asc,
            }
        }
    }

    pub fn indicator(&self, field: SortField) -> &'static str {
        if self.field != field {
            return "⇅";
        }
        match self.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Ascending three-way comparison on one field.
pub fn compare(a: &Nurse, b: &Nurse, field: SortField) -> Ordering {
    match field {
        SortField::Age => a.age.cmp(&b.age),
        SortField::Dob => a.dob.cmp(&b.dob),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::LicenseNumber => a
            .license_number
            .to_lowercase()
            .cmp(&b.license_number.to_lowercase()),
    }
}

/// Case-insensitive substring match on name or license number. An empty term matches everything.
pub fn matches_search(nurse: &Nurse, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    nurse.name.to_lowercase().contains(&term) || nurse.license_number.to_lowercase().contains(&term)
}

/// Filtered and sorted copy of `nurses`. The input is left untouched.
pub fn project(nurses: &[Nurse], search: &str, sort: SortState) -> Vec<Nurse> {
    let mut rows: Vec<Nurse> = nurses
        .iter()
        .filter(|nurse| matches_search(nurse, search))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    rows
}
