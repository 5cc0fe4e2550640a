//! The player list header and footer.

use text::Component;

/// Header and footer shown above and below the player list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabView {
    header: Component,
    footer: Component,
}

impl TabView {
    pub fn new(header: Component, footer: Component) -> Self {
        Self { header, footer }
    }

    pub fn header(&self) -> &Component {
        &self.header
    }

    pub fn set_header(&mut self, header: Component) {
        self.header = header;
    }

    pub fn footer(&self) -> &Component {
        &self.footer
    }

    pub fn set_footer(&mut self, footer: Component) {
        self.footer = footer;
    }
}
