/// Which of a mission's two patch images to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchSize {
    Small,
    #[default]
    Large,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_size_defaults_to_large() {
        assert_eq!(PatchSize::default(), PatchSize::Large);
        assert_ne!(PatchSize::Small, PatchSize::default());
    }
}
