use eframe::egui::{Area, Button, Frame, Order, RichText, ScrollArea, TextEdit, Ui, vec2};

use crate::{
    models::SelectableItem,
    ui::{
        UI_CONFIG, UI_TEXT,
        text::{ICON_CARET_DOWN, ICON_CLEAR, ICON_SEARCH},
    },
};

/// Open/closed state of the control. The live search string only exists
/// while the panel is open, so a stale search can never survive a close.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open {
        search: String,
    },
}

/// What the user did this frame, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    Selected(SelectableItem),
    Cleared,
}

/// Case-insensitive substring filter over the item labels. Order-preserving,
/// never mutates the input; an empty search yields the full list.
pub fn filter_items<'a>(items: &'a [SelectableItem], search: &str) -> Vec<&'a SelectableItem> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.label.to_lowercase().contains(&needle))
        .collect()
}

/// Single-select control over a caller-supplied item list, with live text
/// search. The caller owns the items; the widget only remembers the
/// committed selection label and the open/closed state, and performs no I/O.
///
/// The committed label is label-only persistence: it stays displayed even if
/// the item vanishes from a later item list, until the user picks again.
pub struct SearchDropdown {
    placeholder: String,
    allow_clear: bool,
    state: DropdownState,
    committed: Option<String>,
}

impl SearchDropdown {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            allow_clear: false,
            state: DropdownState::Closed,
            committed: None,
        }
    }

    /// Shows a clear affordance once a selection exists.
    pub fn with_clear(mut self) -> Self {
        self.allow_clear = true;
        self
    }

    pub fn committed_label(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DropdownState::Open { .. })
    }

    /// Trigger text priority: committed selection, else the caller's
    /// default, else the placeholder.
    fn trigger_text(&self, default_label: Option<&str>) -> RichText {
        match (&self.committed, default_label) {
            (Some(label), _) => RichText::new(format!("{label} {ICON_CARET_DOWN}")),
            (None, Some(default)) => RichText::new(format!("{default} {ICON_CARET_DOWN}")),
            (None, None) => RichText::new(format!("{} {ICON_CARET_DOWN}", self.placeholder))
                .color(UI_CONFIG.colors.subdued),
        }
    }

    fn toggle(&mut self) {
        self.state = match self.state {
            DropdownState::Closed => DropdownState::Open {
                search: String::new(),
            },
            DropdownState::Open { .. } => DropdownState::Closed,
        };
    }

    fn close(&mut self) {
        self.state = DropdownState::Closed;
    }

    /// Commits an item: its label is remembered, the search string is
    /// dropped with the panel.
    fn select(&mut self, item: &SelectableItem) -> DropdownEvent {
        self.committed = Some(item.label.clone());
        self.state = DropdownState::Closed;
        DropdownEvent::Selected(item.clone())
    }

    fn clear(&mut self) -> DropdownEvent {
        self.committed = None;
        self.state = DropdownState::Closed;
        DropdownEvent::Cleared
    }

    /// Renders the control. Returns at most one event per frame, only on a
    /// user-driven selection change.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        id_salt: &str,
        items: &[SelectableItem],
        default_label: Option<&str>,
    ) -> Option<DropdownEvent> {
        let mut event = None;

        let trigger = ui
            .horizontal(|ui| {
                let button = Button::new(self.trigger_text(default_label))
                    .min_size(vec2(UI_CONFIG.dropdown_min_width, 0.0));
                let response = ui.add(button);
                // The clear affordance is its own widget beside the trigger,
                // so its click can never double as the open/close toggle.
                if self.allow_clear
                    && self.committed.is_some()
                    && ui.small_button(ICON_CLEAR).clicked()
                {
                    event = Some(self.clear());
                }
                response
            })
            .inner;

        if event.is_none() && trigger.clicked() {
            self.toggle();
        }

        if let DropdownState::Open { search } = self.state.clone() {
            let mut search = search;
            let mut picked: Option<SelectableItem> = None;

            let area = Area::new(ui.make_persistent_id(id_salt))
                .order(Order::Foreground)
                .fixed_pos(trigger.rect.left_bottom() + vec2(0.0, 4.0))
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_min_width(trigger.rect.width().max(UI_CONFIG.dropdown_min_width));
                        ui.horizontal(|ui| {
                            ui.label(ICON_SEARCH);
                            ui.add(
                                TextEdit::singleline(&mut search)
                                    .hint_text(UI_TEXT.search_hint)
                                    .desired_width(f32::INFINITY),
                            );
                        });
                        ui.separator();
                        ScrollArea::vertical()
                            .max_height(UI_CONFIG.dropdown_panel_max_height)
                            .show(ui, |ui| {
                                // Recomputed every frame from the caller's
                                // current items, so an items change while
                                // open re-filters under the live search.
                                for item in filter_items(items, &search) {
                                    if ui.selectable_label(false, &item.label).clicked() {
                                        picked = Some(item.clone());
                                    }
                                }
                            });
                    });
                });

            if let Some(item) = picked {
                event = Some(self.select(&item));
            } else if area.response.clicked_elsewhere() && !trigger.clicked() {
                // Blur closes without reporting a change.
                self.close();
            } else {
                self.state = DropdownState::Open { search };
            }
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::{DropdownEvent, DropdownState, SearchDropdown, filter_items};
    use crate::models::SelectableItem;

    fn coins() -> Vec<SelectableItem> {
        vec![
            SelectableItem::new("1", "Bitcoin"),
            SelectableItem::new("2", "Ethereum"),
        ]
    }

    #[test]
    fn empty_search_yields_the_full_list_in_order() {
        let items = coins();
        let filtered = filter_items(&items, "");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].label, "Bitcoin");
        assert_eq!(filtered[1].label, "Ethereum");
    }

    #[test]
    fn typing_eth_narrows_to_ethereum() {
        let items = coins();
        let filtered = filter_items(&items, "eth");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
        assert_eq!(filtered[0].label, "Ethereum");
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let items = coins();
        assert_eq!(filter_items(&items, "BIT").len(), 1);
        assert_eq!(filter_items(&items, "coin")[0].label, "Bitcoin");
        assert!(filter_items(&items, "dogecoin").is_empty());
    }

    #[test]
    fn filter_preserves_input_order_not_match_quality() {
        let items = vec![
            SelectableItem::new("1", "Wrapped Ether"),
            SelectableItem::new("2", "Ether"),
            SelectableItem::new("3", "Tether"),
        ];
        let labels: Vec<&str> = filter_items(&items, "ether")
            .into_iter()
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Wrapped Ether", "Ether", "Tether"]);
    }

    #[test]
    fn an_items_change_refilters_under_the_same_search() {
        let search = "eth";
        let before = coins();
        assert_eq!(filter_items(&before, search).len(), 1);

        let after = vec![
            SelectableItem::new("2", "Ethereum"),
            SelectableItem::new("3", "Ethereum Classic"),
            SelectableItem::new("4", "Dogecoin"),
        ];
        let labels: Vec<&str> = filter_items(&after, search)
            .into_iter()
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Ethereum", "Ethereum Classic"]);
    }

    #[test]
    fn selecting_commits_the_label_and_closes() {
        let mut dropdown = SearchDropdown::new("Category");
        dropdown.toggle();
        dropdown.state = DropdownState::Open {
            search: "eth".to_string(),
        };

        let item = SelectableItem::new("2", "Ethereum");
        let event = dropdown.select(&item);

        assert_eq!(event, DropdownEvent::Selected(item));
        assert_eq!(dropdown.committed_label(), Some("Ethereum"));
        assert!(!dropdown.is_open());

        // Reopening starts with an empty search, not the stale one.
        dropdown.toggle();
        assert_eq!(
            dropdown.state,
            DropdownState::Open {
                search: String::new()
            }
        );
    }

    #[test]
    fn clearing_resets_the_selection_and_closes() {
        let mut dropdown = SearchDropdown::new("Category").with_clear();
        dropdown.select(&SelectableItem::new("1", "Bitcoin"));
        dropdown.toggle();

        let event = dropdown.clear();
        assert_eq!(event, DropdownEvent::Cleared);
        assert_eq!(dropdown.committed_label(), None);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn trigger_text_priority_is_committed_then_default_then_placeholder() {
        let mut dropdown = SearchDropdown::new("Currency");
        assert_eq!(dropdown.trigger_text(None).text(), "Currency ⏷");
        assert_eq!(dropdown.trigger_text(Some("USD")).text(), "USD ⏷");

        dropdown.select(&SelectableItem::new("id-eur", "EUR"));
        assert_eq!(dropdown.trigger_text(Some("USD")).text(), "EUR ⏷");

        dropdown.clear();
        assert_eq!(dropdown.trigger_text(Some("USD")).text(), "USD ⏷");
    }

    #[test]
    fn committed_label_outlives_the_item_list() {
        let mut dropdown = SearchDropdown::new("Category");
        dropdown.select(&SelectableItem::new("old", "Delisted"));

        // The item is gone from the next list; the label stays committed.
        let items = coins();
        assert!(filter_items(&items, "Delisted").is_empty());
        assert_eq!(dropdown.committed_label(), Some("Delisted"));
    }
}
