use super::*;

pub type SortMap = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortQuery {
    Fields(SortMap),
    Wrapped(IndexMap<String, SortMap>),
}

impl SortQuery {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fields(fields) => fields.is_empty(),
            Self::Wrapped(wrapper) => wrapper.is_empty(),
        }
    }

    // Unwraps one level of the `{"sort": {field: direction}}` shape; a
    // wrapper without the parameter key holds no usable pairs.
    pub fn into_fields(self, parameter_name: &str) -> SortMap {
        match self {
            Self::Fields(fields) => fields,
            Self::Wrapped(mut wrapper) => {
                wrapper.shift_remove(parameter_name).unwrap_or_default()
            }
        }
    }
}

impl Default for SortQuery {
    fn default() -> Self {
        Self::Fields(default())
    }
}

impl From<SortMap> for SortQuery {
    fn from(fields: SortMap) -> Self {
        Self::Fields(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for SortQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(field, direction)| (field.into(), direction.into()))
            .collect::<SortMap>();
        Self::Fields(fields)
    }
}
