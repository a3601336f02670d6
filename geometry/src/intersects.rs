/// Conservative overlap test between two shapes.
///
/// Touching counts as overlapping, so a `false` result proves that the shapes
/// are apart while a `true` result may still need a precise test.
pub trait Intersects<Other: ?Sized = Self> {
    /// Returns wether this shape touches, contains or is contained in `other`
    fn intersects(&self, other: &Other) -> bool;
}
