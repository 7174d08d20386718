use serde::Serialize;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Identifies one input of the book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    AuthorFirstName,
    AuthorLastName,
    PredefinedShelf,
    CustomShelf,
    Genre,
    NumberOfPages,
    InSeries,
    SeriesPosition,
    DateStarted,
    DateFinished,
    PagesRead,
    Rating,
    Review,
}

impl FormField {
    pub const ALL: [FormField; 14] = [
        FormField::Title,
        FormField::AuthorFirstName,
        FormField::AuthorLastName,
        FormField::PredefinedShelf,
        FormField::CustomShelf,
        FormField::Genre,
        FormField::NumberOfPages,
        FormField::InSeries,
        FormField::SeriesPosition,
        FormField::DateStarted,
        FormField::DateFinished,
        FormField::PagesRead,
        FormField::Rating,
        FormField::Review,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Book title",
            FormField::AuthorFirstName => "Author's first name",
            FormField::AuthorLastName => "Author's last name",
            FormField::PredefinedShelf => "Book shelf",
            FormField::CustomShelf => "Secondary shelf",
            FormField::Genre => "Book genre",
            FormField::NumberOfPages => "Number of pages",
            FormField::InSeries => "Is in series?",
            FormField::SeriesPosition => "Series number",
            FormField::DateStarted => "Date started",
            FormField::DateFinished => "Date finished",
            FormField::PagesRead => "Pages read",
            FormField::Rating => "Book rating",
            FormField::Review => "Book review",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered set of form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet(BTreeSet<FormField>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains(&field)
    }

    pub fn insert(&mut self, field: FormField) -> bool {
        self.0.insert(field)
    }

    pub fn remove(&mut self, field: FormField) -> bool {
        self.0.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.iter().copied()
    }

    pub fn union(&self, other: &FieldSet) -> FieldSet {
        self.0.union(&other.0).copied().collect()
    }

    pub fn is_disjoint(&self, other: &FieldSet) -> bool {
        self.0.is_disjoint(&other.0)
    }
}

impl FromIterator<FormField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FormField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[FormField; N]> for FieldSet {
    fn from(fields: [FormField; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl IntoIterator for FieldSet {
    type Item = FormField;
    type IntoIter = btree_set::IntoIter<FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_operations() {
        let a = FieldSet::from([FormField::Title, FormField::Rating]);
        let b = FieldSet::from([FormField::Rating, FormField::Review]);

        let union = a.union(&b);
        assert_eq!(union.len(), 3);
        assert!(union.contains(FormField::Review));
        assert!(!a.is_disjoint(&b));
        assert!(a.is_disjoint(&FieldSet::from([FormField::PagesRead])));
    }

    #[test]
    fn iteration_is_ordered_by_declaration() {
        let set = FieldSet::from([FormField::Review, FormField::Title, FormField::PagesRead]);
        let fields: Vec<_> = set.iter().collect();
        assert_eq!(
            fields,
            vec![FormField::Title, FormField::PagesRead, FormField::Review]
        );
    }
}
