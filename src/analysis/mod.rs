/// Analysis layer: per-chart aggregate series computed from the cleaned
/// [`CatalogTable`](crate::data::model::CatalogTable). Every function here
/// is a single read-only pass; none of them mutate the table, so they can
/// run in any order.
pub mod aggregate;
