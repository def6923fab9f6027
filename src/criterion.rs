use super::*;

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    field: String,
    direction: SortDirection,
}

impl Criterion {
    pub fn new(
        field: impl Into<String>,
        direction: &str,
    ) -> Result<Self, SortError> {
        let direction = direction.parse()?;
        Ok(Self {
            field: field.into(),
            direction,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn apply<T: Sortable>(&self, builder: &mut T::Query) {
        match T::custom_sort(&self.field) {
            Some(handler) => {
                trace!(
                    field = %self.field,
                    direction = %self.direction,
                    "applying custom sort handler"
                );
                handler(builder, self.direction);
            }
            None => {
                trace!(
                    field = %self.field,
                    direction = %self.direction,
                    "ordering by field"
                );
                builder.order_by(&self.field, self.direction);
            }
        }
    }
}
