//! Grouping of records into category buckets.
//!
//! Buckets hold positions into the record list they were built from, so a
//! classification never copies or mutates a record.

use std::marker::PhantomData;

use super::category::{Category, FileTypeCategory, LocationCategory};
use super::record::EmptyFileRecord;
use crate::rules;

/// One ordered bucket per variant of `C`.
///
/// Each bucket keeps record positions in insertion order.
///
/// # Examples
///
/// ```
/// use ea_core::{CategoryBuckets, LocationCategory};
///
/// let mut buckets = CategoryBuckets::<LocationCategory>::new();
/// buckets.push(LocationCategory::Docs, 0);
/// buckets.push(LocationCategory::Docs, 2);
/// buckets.push(LocationCategory::Other, 1);
///
/// assert_eq!(buckets.get(LocationCategory::Docs), &[0, 2]);
/// assert_eq!(buckets.total(), 3);
/// assert_eq!(buckets.non_empty().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBuckets<C: Category> {
    slots: Vec<Vec<usize>>,
    _category: PhantomData<C>,
}

impl<C: Category> Default for CategoryBuckets<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Category> CategoryBuckets<C> {
    /// Creates one empty bucket per category.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Vec::new(); C::ALL.len()],
            _category: PhantomData,
        }
    }

    /// Appends a record position to a bucket.
    pub fn push(&mut self, category: C, index: usize) {
        if let Some(slot) = self.slots.get_mut(category.index()) {
            slot.push(index);
        }
    }

    /// Record positions in a bucket, in insertion order.
    #[must_use]
    pub fn get(&self, category: C) -> &[usize] {
        match self.slots.get(category.index()) {
            Some(slot) => slot,
            None => &[],
        }
    }

    /// Number of records in a bucket.
    #[inline]
    #[must_use]
    pub fn count(&self, category: C) -> usize {
        self.get(category).len()
    }

    /// Number of records across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Every bucket in category order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (C, &[usize])> + '_ {
        C::ALL.iter().map(|&category| (category, self.get(category)))
    }

    /// Buckets holding at least one record, in category order.
    pub fn non_empty(&self) -> impl Iterator<Item = (C, &[usize])> + '_ {
        self.iter().filter(|(_, indices)| !indices.is_empty())
    }
}

/// Location and file-type buckets for one record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Records grouped by [`LocationCategory`].
    pub locations: CategoryBuckets<LocationCategory>,

    /// Records grouped by [`FileTypeCategory`].
    pub file_types: CategoryBuckets<FileTypeCategory>,
}

impl Classification {
    /// Buckets every record by location and by file type.
    ///
    /// Pure and deterministic: the same records always produce the same
    /// buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use ea_core::{Classification, EmptyFileRecord, FileTypeCategory, LocationCategory};
    /// use camino::Utf8Path;
    ///
    /// let records = vec![
    ///     EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("backend/server.js")),
    ///     EmptyFileRecord::new(Utf8Path::new("."), Utf8Path::new("docs/README.md")),
    /// ];
    /// let classification = Classification::from_records(&records);
    ///
    /// assert_eq!(classification.locations.get(LocationCategory::Backend), &[0]);
    /// assert_eq!(classification.file_types.get(FileTypeCategory::Markdown), &[1]);
    /// ```
    #[must_use]
    pub fn from_records(records: &[EmptyFileRecord]) -> Self {
        let mut classification = Self::default();

        for (index, record) in records.iter().enumerate() {
            classification
                .locations
                .push(rules::location_of(record), index);
            classification
                .file_types
                .push(rules::file_type_of(&record.extension), index);
        }

        classification
    }
}
