use super::*;

pub const SORTABLE_WILDCARD: &str = "*";

pub type SortHandler<Q> = fn(&mut Q, SortDirection);

pub trait Sortable {
    type Query: SortableQuery;

    fn sortable_fields() -> Option<SortableFields>;

    fn custom_sort(_field: &str) -> Option<SortHandler<Self::Query>> {
        None
    }

    fn sort_resolver() -> SortResolver {
        default()
    }

    fn sorted(
        builder: &mut Self::Query,
        query: impl Into<Option<SortQuery>>,
    ) -> Result<(), SortError>
    where
        Self: Sized,
    {
        Self::sort_resolver().sorted::<Self>(builder, query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortableFields {
    Only(Vec<String>),
    All,
}

impl SortableFields {
    pub fn only<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        Self::Only(fields)
    }

    pub fn all() -> Self {
        Self::All
    }

    pub fn contains(&self, field: &str) -> bool {
        match self {
            Self::Only(fields) => fields
                .iter()
                .any(|f| f == field || f == SORTABLE_WILDCARD),
            Self::All => true,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SortableFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::only(iter)
    }
}
