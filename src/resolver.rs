use super::*;

#[derive(Debug, Clone, Builder)]
pub struct SortResolver {
    #[builder(default = "sort".to_owned())]
    sort_parameter_name: String,

    #[builder(default)]
    default_criteria: SortMap,
}

impl SortResolver {
    pub fn sort_parameter_name(&self) -> &str {
        &self.sort_parameter_name
    }

    pub fn default_criteria(&self) -> &SortMap {
        &self.default_criteria
    }

    pub fn sorted<T: Sortable>(
        &self,
        builder: &mut T::Query,
        query: impl Into<Option<SortQuery>>,
    ) -> Result<(), SortError> {
        let fields = self.resolve_fields(query.into());
        let criteria = build_criteria(&fields)?;

        let sortable = T::sortable_fields().ok_or_else(|| {
            SortError::MissingSortableDeclaration(type_name::<T>())
        })?;

        for criterion in &criteria {
            if !sortable.contains(criterion.field()) {
                trace!(
                    field = criterion.field(),
                    "field is not sortable, dropping criterion"
                );
                continue;
            }
            criterion.apply::<T>(builder);
        }

        Ok(())
    }

    fn resolve_fields(&self, query: Option<SortQuery>) -> SortMap {
        match query {
            Some(query) if !query.is_empty() => {
                query.into_fields(&self.sort_parameter_name)
            }
            _ => self.default_criteria.clone(),
        }
    }
}

impl Default for SortResolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Fails on the first invalid direction, before anything is applied.
fn build_criteria(fields: &SortMap) -> Result<Vec<Criterion>, SortError> {
    fields
        .iter()
        .map(|(field, direction)| Criterion::new(field.as_str(), direction))
        .collect()
}
