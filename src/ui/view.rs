/// Which content region is on screen. Modelled as an enum so "exactly one
/// surface visible" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Table,
    Chart,
}

impl ActiveView {
    /// Switch-to-chart action. Returns whether anything changed so callers can
    /// skip logging a no-op.
    pub fn show_chart(&mut self) -> bool {
        self.switch_to(ActiveView::Chart)
    }

    /// Switch-to-table action.
    pub fn show_table(&mut self) -> bool {
        self.switch_to(ActiveView::Table)
    }

    pub fn is_table_visible(self) -> bool {
        self == ActiveView::Table
    }

    pub fn is_chart_visible(self) -> bool {
        self == ActiveView::Chart
    }

    fn switch_to(&mut self, target: ActiveView) -> bool {
        if *self == target {
            return false;
        }
        log::debug!("view {:?} -> {:?}", self, target);
        *self = target;
        true
    }
}
