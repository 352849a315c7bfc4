use super::catalog::{Industry, OptionKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the customer has picked so far.
///
/// Single-valued fields keep at most one package, hosting plan and domain plan
/// selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub package: Option<OptionKey>,
    pub industry: Industry,
    pub addons: BTreeSet<OptionKey>,
    pub hosting: Option<OptionKey>,
    pub domain: Option<OptionKey>,
    pub discount_code: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_package(&mut self, key: impl Into<OptionKey>) {
        self.package = Some(key.into());
    }

    pub fn clear_package(&mut self) {
        self.package = None;
    }

    /// Switching industry drops every add-on picked for the previous one.
    pub fn set_industry(&mut self, industry: Industry) {
        self.industry = industry;
        self.addons.clear();
    }

    pub fn toggle_addon(&mut self, key: impl Into<OptionKey>, checked: bool) {
        let key = key.into();
        if checked {
            self.addons.insert(key);
        } else {
            self.addons.remove(&key);
        }
    }

    pub fn select_hosting(&mut self, key: Option<OptionKey>) {
        self.hosting = key;
    }

    pub fn select_domain(&mut self, key: Option<OptionKey>) {
        self.domain = key;
    }

    pub fn set_discount_code(&mut self, code: impl Into<String>) {
        self.discount_code = code.into();
    }
}
