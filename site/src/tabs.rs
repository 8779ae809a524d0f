// TabSet
//
// exclusive activation over a fixed list of tab ids.  exactly one button and
// its panel are active after any click; the last click wins
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: usize,
}

impl TabSet {
    pub fn new(ids: Vec<String>) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }

        Some(TabSet { ids, active: 0 })
    }

    pub fn active_id(&self) -> &str {
        &self.ids[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    // unknown or empty ids leave the current tab alone
    pub fn activate(&mut self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }

        match self.ids.iter().position(|candidate| candidate == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}

pub fn panel_id(tab_id: &str) -> String {
    format!("{tab_id}-advantages")
}
