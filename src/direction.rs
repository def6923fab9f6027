use super::*;

pub const ORDER_ASCENDING: &str = "asc";
pub const ORDER_DESCENDING: &str = "desc";

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        use SortDirection::*;
        match self {
            Asc => ORDER_ASCENDING,
            Desc => ORDER_DESCENDING,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ORDER_ASCENDING => Ok(Self::Asc),
            ORDER_DESCENDING => Ok(Self::Desc),
            other => Err(SortError::InvalidDirection(other.to_owned())),
        }
    }
}
