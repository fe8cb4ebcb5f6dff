use super::EntityMetadata;

/// Trait for aggregate roots
///
/// Instance accessors plus the static metadata every aggregate class
/// declares about itself (index, collection, UI names).
pub trait AggregateRoot {
    type Id;

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Aggregate index in the system (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the store (for example "officer")
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    /// Full aggregate name (for example "a001_officer")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
