use super::source_model::SourceModel;

/// The full set of tracked sources at a point in time.
///
/// Models are owned by the collection, so no two entries can alias the same
/// source. Membership is append-only: sources are added when seeded or
/// detected, never retired.
#[derive(Debug, Clone, Default)]
pub struct SkyModel {
    sources: Vec<SourceModel>,
}

impl SkyModel {
    /// Create an empty sky model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly tracked source.
    pub(crate) fn push_source(&mut self, source: SourceModel) {
        self.sources.push(source);
    }

    /// Number of tracked sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether any source is tracked yet.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Look up one tracked source by position in the collection.
    pub fn source(&self, index: usize) -> Option<&SourceModel> {
        self.sources.get(index)
    }

    pub(crate) fn source_mut(&mut self, index: usize) -> Option<&mut SourceModel> {
        self.sources.get_mut(index)
    }

    /// Borrow the full ordered collection.
    pub fn sources(&self) -> &[SourceModel] {
        &self.sources
    }

    /// Iterate over the tracked sources in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceModel> {
        self.sources.iter()
    }
}
