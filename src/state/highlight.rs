// Highlight state - the row or paging button under the pointer

/// What the pointer currently hovers. `Entry` is an index into the visible
/// slice, not the full listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Entry(usize),
    PrevButton,
    NextButton,
}
