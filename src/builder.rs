use super::*;

pub trait SortableQuery {
    fn order_by(&mut self, field: &str, direction: SortDirection);
}
