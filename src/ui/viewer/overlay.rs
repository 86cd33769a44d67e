// SPDX-License-Identifier: MPL-2.0
//! What the overlay layer shows, as a pure function of viewer state.

/// Inputs of the overlay layer.
#[derive(Debug, Clone, Copy)]
pub struct OverlayInput<'a> {
    pub is_loading: bool,
    pub show_hint: bool,
    pub is_zoomed: bool,
    pub caption: Option<&'a str>,
    pub index: usize,
    pub item_count: usize,
}

/// Resolved overlay content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayModel {
    pub spinner: bool,
    pub hint: bool,
    pub caption: Option<String>,
    /// `"i / n"` position counter.
    pub counter: Option<String>,
    /// Previous/next buttons.
    pub arrows: bool,
}

impl OverlayModel {
    #[must_use]
    pub fn from_input(input: OverlayInput<'_>) -> Self {
        let browsing = !input.is_zoomed;
        let has_items = input.item_count > 0;

        Self {
            spinner: input.is_loading,
            hint: input.show_hint && input.is_zoomed,
            caption: input
                .caption
                .filter(|_| browsing)
                .map(ToOwned::to_owned),
            counter: (browsing && has_items)
                .then(|| format!("{} / {}", input.index + 1, input.item_count)),
            arrows: browsing && input.item_count > 1,
        }
    }
}
