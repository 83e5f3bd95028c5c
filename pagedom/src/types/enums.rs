/// Intrinsic block size of an element.
///
/// `Auto` boxes are as tall as their content. `Fixed` stands in for a
/// stylesheet or replaced-element height; inline `height` declarations
/// still override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u32),
    #[default]
    Auto,
}
