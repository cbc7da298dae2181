/// Identity of a pinned region.
///
/// Only used to order regions that share a start offset, so snapping does not depend on
/// registration order.
pub trait RegionKey: Ord {}
impl<T: Ord> RegionKey for T {}
