/// Render layer: controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, Objects last.
/// Within a layer, items are depth-sorted (painter's algorithm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    /// Distant scenery such as the starfield.
    Background = 0,
    /// Flat guides such as orbit rings.
    Guides = 1,
    #[default]
    Objects = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_objects() {
        assert_eq!(RenderLayer::default(), RenderLayer::Objects);
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Guides);
        assert!(RenderLayer::Guides < RenderLayer::Objects);
    }
}
