//! Results of derived queries that may have nothing to report.

/// Outcome of an aggregate over an entity's articles.
///
/// `NoData` and `Empty` are both "absent" in the collapsed view returned
/// by [`Aggregate::into_option`], but stay distinguishable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate<T> {
    /// The entity has no articles to aggregate over.
    NoData,
    /// There were articles, but the computed result is empty.
    Empty,
    /// A non-empty result.
    Found(T),
}

impl<T> Aggregate<T> {
    /// Returns true for both `NoData` and `Empty`.
    pub fn is_absent(&self) -> bool {
        !matches!(self, Aggregate::Found(_))
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Aggregate::NoData)
    }

    /// Collapse to an option: `None` unless a result was found.
    pub fn into_option(self) -> Option<T> {
        match self {
            Aggregate::Found(value) => Some(value),
            Aggregate::NoData | Aggregate::Empty => None,
        }
    }

    /// Borrow the found result, if any.
    pub fn as_found(&self) -> Option<&T> {
        match self {
            Aggregate::Found(value) => Some(value),
            Aggregate::NoData | Aggregate::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Aggregate<U> {
        match self {
            Aggregate::NoData => Aggregate::NoData,
            Aggregate::Empty => Aggregate::Empty,
            Aggregate::Found(value) => Aggregate::Found(f(value)),
        }
    }
}

impl<C> Aggregate<C>
where
    for<'a> &'a C: IntoIterator,
{
    /// Classify a computed collection: `NoData` when there was no input,
    /// `Empty` when the collection is empty, `Found` otherwise.
    pub fn from_collection(has_input: bool, collection: C) -> Self {
        if !has_input {
            Aggregate::NoData
        } else if (&collection).into_iter().next().is_none() {
            Aggregate::Empty
        } else {
            Aggregate::Found(collection)
        }
    }
}
